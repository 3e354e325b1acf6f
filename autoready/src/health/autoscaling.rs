//! Health check for `autoscaling/v2` HorizontalPodAutoscaler.

use k8s_openapi::api::autoscaling::v2::HorizontalPodAutoscaler;
use serde_json::Value;

use super::decode;

const DEGRADED: [&str; 4] = [
    "FailedGetScale",
    "FailedUpdateScale",
    "FailedGetResourceMetric",
    "InvalidSelector",
];

/// An autoscaler is ready while it is actively scaling (or scale-limited)
/// and no degraded condition is raised. A degraded condition wins over a
/// healthy one regardless of list order.
pub fn horizontal_pod_autoscaler_ready(obj: &Value) -> bool {
    let Some(hpa) = decode::<HorizontalPodAutoscaler>(obj) else {
        return false;
    };

    let conditions =
        hpa.status.and_then(|s| s.conditions).unwrap_or_default();
    if conditions
        .iter()
        .any(|c| DEGRADED.contains(&c.type_.as_str()) && c.status == "True")
    {
        return false;
    }
    conditions.iter().any(|c| {
        matches!(c.type_.as_str(), "ScalingActive" | "ScalingLimited")
            && c.status == "True"
    })
}
