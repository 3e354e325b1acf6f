use tracing::{debug, info};

use crate::config::Input;
use crate::health::HealthRegistry;
use crate::request::ResourceState;
use crate::resource::{Ready, conditions};

/// Decide readiness for one desired resource. Stages run in strict order
/// and stop at the first explicit opinion; "not ready" is only ever the
/// absence of an explicit True, never an engine-written False.
pub fn resolve(
    name: &str,
    desired: &mut ResourceState,
    observed: Option<&ResourceState>,
    input: &Input,
    registry: &HealthRegistry,
) {
    // A resource that has not been observed yet cannot be ready.
    let Some(observed) = observed else {
        debug!(
            resource = name,
            "Ignoring desired resource that does not appear in observed resources"
        );
        return;
    };

    // An earlier pipeline step already has an opinion; never override it.
    if desired.ready != Ready::Unspecified {
        debug!(
            resource = name,
            ready = ?desired.ready,
            "Ignoring desired resource that already has explicit readiness"
        );
        return;
    }

    for selector in &input.force_ready {
        if selector.matches(observed.api_version(), observed.kind()) {
            debug!(
                resource = name,
                "Forcing readiness: resource matches a forceReady selector"
            );
            desired.ready = Ready::True;
            conditions::set_ready_available(&mut desired.resource);
            return;
        }
    }

    if let Some(gvk) = observed.gvk() {
        if let Some(check) = registry.lookup(&gvk) {
            if check(&observed.resource) {
                info!(
                    resource = name,
                    kind = %gvk.kind,
                    "Health check determined that composed resource is ready"
                );
                desired.ready = Ready::True;
                return;
            }
            debug!(
                resource = name,
                kind = %gvk.kind,
                "Health check did not pass; leaving readiness unspecified"
            );
        }
    }

    // Generic fallback: the resource itself reports a Ready=True condition.
    if conditions::status_is_true(&observed.resource, conditions::TYPE_READY)
    {
        info!(
            resource = name,
            "Automatically determined that composed resource is ready"
        );
        desired.ready = Ready::True;
    }
}
