//! Health checks for core `v1` kinds with meaningful status.

use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Pod};
use serde_json::Value;

use super::decode;

const WAITING_FAILURES: [&str; 4] = [
    "ImagePullBackOff",
    "ErrImagePull",
    "CrashLoopBackOff",
    "CreateContainerConfigError",
];

/// Pod readiness follows its phase: Succeeded is ready; Running counts only
/// for always-restart pods that report Ready and have no failing waiting or
/// terminated containers. Everything else is progressing or failed.
pub fn pod_ready(obj: &Value) -> bool {
    let Some(pod) = decode::<Pod>(obj) else {
        return false;
    };
    let Some(status) = pod.status else {
        return false;
    };

    let phase = status.phase.clone().unwrap_or_default();
    match phase.as_str() {
        "Succeeded" => true,
        "Running" => {
            let restart_policy = pod
                .spec
                .as_ref()
                .and_then(|s| s.restart_policy.as_deref());
            // OnFailure/Never pods are still progressing while running.
            if restart_policy != Some("Always") {
                return false;
            }
            if status
                .conditions
                .unwrap_or_default()
                .iter()
                .any(|c| c.type_ == "Ready" && c.status == "True")
            {
                return true;
            }
            for cs in status.container_statuses.unwrap_or_default() {
                let waiting_reason = cs
                    .state
                    .as_ref()
                    .and_then(|s| s.waiting.as_ref())
                    .and_then(|w| w.reason.as_deref());
                if waiting_reason
                    .is_some_and(|r| WAITING_FAILURES.contains(&r))
                {
                    return false;
                }
                if cs
                    .state
                    .as_ref()
                    .and_then(|s| s.terminated.as_ref())
                    .is_some()
                {
                    return false;
                }
            }
            // Running but not ready yet.
            false
        }
        _ => false,
    }
}

/// A claim is ready only once bound to a volume.
pub fn persistent_volume_claim_ready(obj: &Value) -> bool {
    let Some(pvc) = decode::<PersistentVolumeClaim>(obj) else {
        return false;
    };
    pvc.status.and_then(|s| s.phase).as_deref() == Some("Bound")
}
