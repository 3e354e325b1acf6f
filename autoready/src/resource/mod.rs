pub mod conditions;
pub mod fields;

use kube::core::GroupVersionKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Readiness opinion attached to a desired resource. `Unspecified` means no
/// pipeline step has decided yet; an explicit value is never overwritten.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Ready {
    #[default]
    Unspecified,
    True,
    False,
}

impl Ready {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Ready::Unspecified)
    }
}

/// Split an `apiVersion` string into (group, version). Core/legacy types use
/// a one-segment apiVersion and an empty group.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

/// GVK identity of a manifest, if it carries both apiVersion and kind.
pub fn gvk_of(doc: &Value) -> Option<GroupVersionKind> {
    let api_version = doc.get("apiVersion")?.as_str()?;
    let kind = doc.get("kind")?.as_str()?;
    let (group, version) = split_api_version(api_version);
    Some(GroupVersionKind::gvk(group, version, kind))
}
