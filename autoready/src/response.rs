//! Invocation response: the refined desired state plus result entries the
//! transport reports back to the orchestrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::request::{ResourceState, RunRequest, State};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Warning,
    Fatal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultEntry {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunResponse {
    pub desired: State,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResultEntry>,
}

impl RunResponse {
    /// Start a response that carries the request's desired state through
    /// unchanged; the engine then refines it.
    pub fn to(req: &RunRequest) -> Self {
        Self {
            desired: req.desired.clone(),
            results: Vec::new(),
        }
    }

    pub fn set_desired_composed_resources(
        &mut self,
        resources: BTreeMap<String, ResourceState>,
    ) {
        self.desired.resources = resources;
    }

    pub fn set_desired_composite(&mut self, composite: ResourceState) {
        self.desired.composite = Some(composite);
    }

    /// Record a fatal result. Callers return the response as-is afterwards;
    /// no desired-state mutation has been attached.
    pub fn fatal(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(%message, "Invocation failed");
        self.results.push(ResultEntry {
            severity: Severity::Fatal,
            message,
        });
    }

    pub fn normal(&mut self, message: impl Into<String>) {
        self.results.push(ResultEntry {
            severity: Severity::Normal,
            message: message.into(),
        });
    }
}
