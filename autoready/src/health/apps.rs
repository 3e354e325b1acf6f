//! Health checks for `apps/v1` workload kinds. These follow the readiness
//! conventions of common continuous-delivery tooling.

use serde_json::Value;

use crate::resource::conditions;
use crate::resource::fields::{nested_i64, nested_str};

/// A Deployment is ready when every replica is updated and available and the
/// Available condition reports True.
pub fn deployment_ready(obj: &Value) -> bool {
    // spec.replicas may be omitted; the API defaults it to one.
    let spec_replicas = nested_i64(obj, &["spec", "replicas"]).unwrap_or(1);

    let Some(updated) = nested_i64(obj, &["status", "updatedReplicas"])
    else {
        return false;
    };
    let Some(available) = nested_i64(obj, &["status", "availableReplicas"])
    else {
        return false;
    };
    if spec_replicas != updated || spec_replicas != available {
        return false;
    }

    conditions::status_is_true(obj, "Available")
}

/// A StatefulSet is ready when all replicas are ready at the current
/// revision and the rollout has converged (current == update revision).
pub fn stateful_set_ready(obj: &Value) -> bool {
    let spec_replicas = nested_i64(obj, &["spec", "replicas"]).unwrap_or(1);

    let Some(ready) = nested_i64(obj, &["status", "readyReplicas"]) else {
        return false;
    };
    let Some(current) = nested_i64(obj, &["status", "currentReplicas"])
    else {
        return false;
    };
    if spec_replicas != ready || spec_replicas != current {
        return false;
    }

    let Some(current_revision) =
        nested_str(obj, &["status", "currentRevision"])
    else {
        return false;
    };
    let Some(update_revision) = nested_str(obj, &["status", "updateRevision"])
    else {
        return false;
    };
    current_revision == update_revision
}

/// A DaemonSet is ready when every scheduled pod is ready, updated and
/// available.
pub fn daemon_set_ready(obj: &Value) -> bool {
    let Some(desired) =
        nested_i64(obj, &["status", "desiredNumberScheduled"])
    else {
        return false;
    };
    let Some(ready) = nested_i64(obj, &["status", "numberReady"]) else {
        return false;
    };
    let Some(updated) =
        nested_i64(obj, &["status", "updatedNumberScheduled"])
    else {
        return false;
    };
    let Some(available) = nested_i64(obj, &["status", "numberAvailable"])
    else {
        return false;
    };
    desired == ready && updated == desired && available == desired
}

/// A ReplicaSet is ready when the controller has observed the current
/// generation, no ReplicaFailure condition is raised and enough replicas are
/// available.
pub fn replica_set_ready(obj: &Value) -> bool {
    let generation = nested_i64(obj, &["metadata", "generation"]).unwrap_or(0);
    let observed_generation =
        nested_i64(obj, &["status", "observedGeneration"]).unwrap_or(0);
    if observed_generation < generation {
        return false;
    }

    if conditions::status_is_true(obj, "ReplicaFailure") {
        return false;
    }

    let spec_replicas = nested_i64(obj, &["spec", "replicas"]).unwrap_or(1);
    let available =
        nested_i64(obj, &["status", "availableReplicas"]).unwrap_or(0);
    available >= spec_replicas
}
