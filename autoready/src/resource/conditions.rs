//! Kubernetes-style status conditions on semi-structured manifests.

use chrono::Utc;
use serde_json::{Value, json};

use super::fields;

pub const TYPE_READY: &str = "Ready";
pub const STATUS_TRUE: &str = "True";
pub const REASON_AVAILABLE: &str = "Available";

/// Find a condition entry by type in `status.conditions`.
pub fn find<'a>(doc: &'a Value, cond_type: &str) -> Option<&'a Value> {
    fields::nested_slice(doc, &["status", "conditions"])?
        .iter()
        .find(|c| c.get("type").and_then(Value::as_str) == Some(cond_type))
}

/// Whether the condition of the given type reports status "True".
pub fn status_is_true(doc: &Value, cond_type: &str) -> bool {
    find(doc, cond_type)
        .and_then(|c| c.get("status"))
        .and_then(Value::as_str)
        == Some(STATUS_TRUE)
}

/// Upsert a `Ready: True` condition (reason Available) on the manifest's own
/// condition list, creating `status.conditions` along the way when absent.
pub fn set_ready_available(doc: &mut Value) {
    let cond = json!({
        "type": TYPE_READY,
        "status": STATUS_TRUE,
        "reason": REASON_AVAILABLE,
        "lastTransitionTime": Utc::now().to_rfc3339(),
    });

    let Value::Object(root) = doc else {
        *doc = json!({"status": {"conditions": [cond]}});
        return;
    };
    let status = root.entry("status").or_insert_with(|| json!({}));
    let Value::Object(status) = status else {
        *status = json!({"conditions": [cond]});
        return;
    };
    let conds = status.entry("conditions").or_insert_with(|| json!([]));
    let Value::Array(list) = conds else {
        *conds = json!([cond]);
        return;
    };
    match list
        .iter_mut()
        .find(|c| c.get("type").and_then(Value::as_str) == Some(TYPE_READY))
    {
        Some(existing) => *existing = cond,
        None => list.push(cond),
    }
}
