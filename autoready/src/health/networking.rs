//! Health checks for service-exposure kinds.

use serde_json::Value;

use crate::resource::fields::{nested_slice, nested_str};

/// An Ingress is ready once the load balancer has assigned at least one
/// ingress point.
pub fn ingress_ready(obj: &Value) -> bool {
    load_balancer_assigned(obj)
}

/// Services are ready by existence, except LoadBalancer services, which
/// wait for an assigned ingress point like an Ingress does.
pub fn service_ready(obj: &Value) -> bool {
    let service_type =
        nested_str(obj, &["spec", "type"]).unwrap_or("ClusterIP");
    if service_type != "LoadBalancer" {
        return true;
    }
    load_balancer_assigned(obj)
}

fn load_balancer_assigned(obj: &Value) -> bool {
    nested_slice(obj, &["status", "loadBalancer", "ingress"])
        .is_some_and(|ingress| !ingress.is_empty())
}
