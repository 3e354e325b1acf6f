//! Invocation envelope: the pipeline state snapshot handed to the function
//! and the accessors the engine consumes it through. Transport framing,
//! request tagging and TTL live outside this crate.

use std::collections::BTreeMap;

use kube::core::GroupVersionKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RequestError;
use crate::resource::{Ready, fields, gvk_of};

/// One resource slot in a state snapshot: the manifest document plus the
/// pipeline's readiness opinion about it. Observed slots ignore `ready`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceState {
    pub resource: Value,
    #[serde(skip_serializing_if = "Ready::is_unspecified")]
    pub ready: Ready,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            resource: Value::Object(Default::default()),
            ready: Ready::Unspecified,
        }
    }
}

impl ResourceState {
    pub fn api_version(&self) -> &str {
        fields::nested_str(&self.resource, &["apiVersion"]).unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        fields::nested_str(&self.resource, &["kind"]).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        fields::nested_str(&self.resource, &["metadata", "name"])
            .unwrap_or("")
    }

    pub fn gvk(&self) -> Option<GroupVersionKind> {
        gvk_of(&self.resource)
    }
}

/// Composite resource plus its composed resources, keyed by resource name.
/// The maps are ordered only for deterministic serialization; nothing may
/// depend on iteration order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<ResourceState>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, ResourceState>,
}

/// One invocation's view of the pipeline: optional input and context
/// documents plus observed and desired state snapshots.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub observed: State,
    pub desired: State,
}

impl RunRequest {
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.as_ref().and_then(|c| c.get(key))
    }

    /// The observed composite resource. Its absence means the collaborator
    /// could not supply state this invocation depends on.
    pub fn observed_composite(
        &self,
    ) -> Result<&ResourceState, RequestError> {
        self.observed
            .composite
            .as_ref()
            .ok_or(RequestError::MissingObservedComposite)
    }

    pub fn observed_composed_resources(
        &self,
    ) -> &BTreeMap<String, ResourceState> {
        &self.observed.resources
    }

    /// Desired composed resources, cloned so the engine can refine them
    /// without touching the request snapshot.
    pub fn desired_composed_resources(
        &self,
    ) -> BTreeMap<String, ResourceState> {
        self.desired.resources.clone()
    }

    pub fn desired_composite(&self) -> Option<&ResourceState> {
        self.desired.composite.as_ref()
    }
}
