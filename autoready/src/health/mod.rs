//! Per-type health checks and the dispatch registry.

pub mod apps;
pub mod autoscaling;
pub mod batch;
pub mod core;
pub mod networking;

use std::collections::HashMap;

use kube::core::GroupVersionKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decide whether a resource is ready from its observed manifest alone.
/// Checks are total: a malformed or partially-populated document yields
/// `false`, never an error.
pub type HealthCheck = fn(&Value) -> bool;

/// Dispatch table from resource identity to health check. Populated once,
/// before any request is served, then read-only; lookups are lock-free
/// `&self` reads, safe to share across threads.
#[derive(Clone, Default)]
pub struct HealthRegistry {
    checks: HashMap<GroupVersionKind, HealthCheck>,
}

impl HealthRegistry {
    /// An empty registry. Every lookup falls through to the generic
    /// readiness-condition check.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in checks for well-known Kubernetes kinds.
    pub fn builtin() -> Self {
        let mut r = Self::new();
        r.register(gvk("apps", "v1", "Deployment"), apps::deployment_ready);
        r.register(
            gvk("apps", "v1", "StatefulSet"),
            apps::stateful_set_ready,
        );
        r.register(gvk("apps", "v1", "DaemonSet"), apps::daemon_set_ready);
        r.register(gvk("apps", "v1", "ReplicaSet"), apps::replica_set_ready);
        r.register(gvk("batch", "v1", "Job"), batch::job_ready);
        r.register(gvk("batch", "v1", "CronJob"), batch::cron_job_ready);
        r.register(
            gvk("autoscaling", "v2", "HorizontalPodAutoscaler"),
            autoscaling::horizontal_pod_autoscaler_ready,
        );
        r.register(
            gvk("networking.k8s.io", "v1", "Ingress"),
            networking::ingress_ready,
        );
        r.register(gvk("", "v1", "Service"), networking::service_ready);
        r.register(gvk("", "v1", "Pod"), self::core::pod_ready);
        r.register(
            gvk("", "v1", "PersistentVolumeClaim"),
            self::core::persistent_volume_claim_ready,
        );
        // Existence implies readiness for these kinds.
        for kind in ["ConfigMap", "Secret", "Namespace", "ServiceAccount"] {
            r.register(gvk("", "v1", kind), always_ready);
        }
        for kind in ["Role", "RoleBinding"] {
            r.register(
                gvk("rbac.authorization.k8s.io", "v1", kind),
                always_ready,
            );
        }
        r
    }

    /// Insert or overwrite the check for an identity.
    pub fn register(&mut self, gvk: GroupVersionKind, check: HealthCheck) {
        self.checks.insert(gvk, check);
    }

    /// Exact-identity lookup; no wildcarding, no inheritance.
    pub fn lookup(&self, gvk: &GroupVersionKind) -> Option<HealthCheck> {
        self.checks.get(gvk).copied()
    }
}

fn gvk(group: &str, version: &str, kind: &str) -> GroupVersionKind {
    GroupVersionKind::gvk(group, version, kind)
}

fn always_ready(_obj: &Value) -> bool {
    true
}

/// Schema-checked decode of a manifest into a typed Kubernetes object. A
/// shape mismatch is an ordinary "not decodable" outcome, not an error.
pub(crate) fn decode<T: DeserializeOwned>(obj: &Value) -> Option<T> {
    serde_json::from_value(obj.clone()).ok()
}
