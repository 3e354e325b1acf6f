use std::collections::BTreeMap;

use tracing::info;

use crate::request::ResourceState;
use crate::resource::Ready;

/// Roll per-resource readiness up into the composite. Runs only after every
/// desired resource has been resolved. The composite is ready once at least
/// `expected` resources report True and none is still pending; otherwise it
/// is explicitly not ready. The prior desired composite document is carried
/// through unchanged apart from the readiness flag.
pub fn aggregate(
    desired: &BTreeMap<String, ResourceState>,
    expected: usize,
    prior: Option<&ResourceState>,
) -> ResourceState {
    let ready = desired
        .values()
        .filter(|r| r.ready == Ready::True)
        .count();
    let total = desired.len();

    let mut composite = prior.cloned().unwrap_or_default();
    composite.ready = if expected <= ready && ready == total {
        Ready::True
    } else {
        Ready::False
    };
    info!(
        expected,
        ready,
        total,
        composite_ready = ?composite.ready,
        "Aggregated composed readiness into composite"
    );
    composite
}
