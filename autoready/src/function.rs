//! The readiness-resolution function: one synchronous, stateless invocation
//! over a snapshot of observed and desired pipeline state.

use tracing::{debug, instrument};

use crate::config::Input;
use crate::engine::{composite, resolver};
use crate::health::HealthRegistry;
use crate::request::RunRequest;
use crate::response::RunResponse;

pub struct Function {
    registry: HealthRegistry,
}

impl Default for Function {
    fn default() -> Self {
        Self::new()
    }
}

impl Function {
    pub fn new() -> Self {
        Self {
            registry: HealthRegistry::builtin(),
        }
    }

    /// Use an alternate health-check registry.
    pub fn with_registry(registry: HealthRegistry) -> Self {
        Self { registry }
    }

    /// Run one invocation. Errors abort the whole invocation with a fatal
    /// result before any desired-state mutation is attached, so the caller
    /// never observes partial output.
    #[instrument(skip_all)]
    pub fn run(&self, req: &RunRequest) -> RunResponse {
        let mut rsp = RunResponse::to(req);

        let input = match Input::from_request(req) {
            Ok(input) => input,
            Err(e) => {
                rsp.fatal(format!("cannot get function input: {e}"));
                return rsp;
            }
        };

        let composite_xr = match req.observed_composite() {
            Ok(xr) => xr,
            Err(e) => {
                rsp.fatal(format!(
                    "cannot get observed composite resource: {e}"
                ));
                return rsp;
            }
        };
        debug!(
            xr_api_version = composite_xr.api_version(),
            xr_kind = composite_xr.kind(),
            xr_name = composite_xr.name(),
            "Running readiness resolution"
        );

        let observed = req.observed_composed_resources();
        let mut desired = req.desired_composed_resources();
        debug!(count = desired.len(), "Found desired resources");

        for (name, dr) in desired.iter_mut() {
            resolver::resolve(
                name,
                dr,
                observed.get(name.as_str()),
                &input,
                &self.registry,
            );
        }

        if let Some(expected) = input.expected_count() {
            let dxr = composite::aggregate(
                &desired,
                expected,
                req.desired_composite(),
            );
            rsp.set_desired_composite(dxr);
        }

        rsp.set_desired_composed_resources(desired);
        rsp
    }
}
