//! Caller-supplied configuration for one invocation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::request::RunRequest;

/// Well-known request-context key carrying an input override. An input found
/// here takes priority over the statically-composed one.
pub const CONTEXT_KEY: &str = "autoready.fn.crossplane.io";

#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    /// Selectors whose matching composed resources are marked ready without
    /// consulting any health check.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub force_ready: Vec<ApiVersionKindSelector>,

    /// Number of composed resources that must report readiness before the
    /// composite itself is marked ready. When unset, composite readiness is
    /// left alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_resource_count: Option<i64>,
}

/// Pattern over a resource's own apiVersion/kind. An absent or empty field
/// matches anything.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiVersionKindSelector {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl ApiVersionKindSelector {
    pub fn matches(&self, api_version: &str, kind: &str) -> bool {
        (self.kind.is_empty() || self.kind == kind)
            && (self.api_version.is_empty()
                || self.api_version == api_version)
    }
}

impl Input {
    /// Resolve the input for one invocation, preferring a context-supplied
    /// document over the composed one. Absent both, everything defaults.
    pub fn from_request(req: &RunRequest) -> Result<Self, InputError> {
        let raw = req.context_value(CONTEXT_KEY).or(req.input.as_ref());
        let input: Input = match raw {
            Some(doc) => serde_json::from_value(doc.clone())?,
            None => Input::default(),
        };
        input.validate()
    }

    fn validate(self) -> Result<Self, InputError> {
        if let Some(n) = self.expected_resource_count {
            if n < 0 {
                return Err(InputError::NegativeExpectedCount(n));
            }
        }
        Ok(self)
    }

    pub fn expected_count(&self) -> Option<usize> {
        self.expected_resource_count.map(|n| n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selector(api_version: &str, kind: &str) -> ApiVersionKindSelector {
        ApiVersionKindSelector {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    #[test]
    fn empty_selector_fields_match_anything() {
        assert!(selector("", "").matches("apps/v1", "Deployment"));
        assert!(selector("", "Deployment").matches("apps/v1", "Deployment"));
        assert!(selector("apps/v1", "").matches("apps/v1", "StatefulSet"));
        assert!(!selector("v1", "").matches("apps/v1", "Deployment"));
        assert!(!selector("", "Service").matches("apps/v1", "Deployment"));
    }

    #[test]
    fn parses_camel_case_input_document() {
        let req = RunRequest {
            input: Some(json!({
                "apiVersion": "auto-ready.fn.crossplane.io/v1beta1",
                "kind": "Input",
                "forceReady": [{"kind": "Bucket"}],
                "expectedResourceCount": 2,
            })),
            ..Default::default()
        };
        let input = Input::from_request(&req).unwrap();
        assert_eq!(input.force_ready.len(), 1);
        assert_eq!(input.force_ready[0].kind, "Bucket");
        assert_eq!(input.expected_count(), Some(2));
    }

    #[test]
    fn context_input_takes_priority() {
        let req = RunRequest {
            input: Some(json!({"expectedResourceCount": 2})),
            context: Some(json!({
                (CONTEXT_KEY): {"expectedResourceCount": 1},
            })),
            ..Default::default()
        };
        let input = Input::from_request(&req).unwrap();
        assert_eq!(input.expected_count(), Some(1));
    }

    #[test]
    fn negative_expected_count_is_rejected() {
        let req = RunRequest {
            input: Some(json!({"expectedResourceCount": -1})),
            ..Default::default()
        };
        assert!(matches!(
            Input::from_request(&req),
            Err(InputError::NegativeExpectedCount(-1))
        ));
    }

    #[test]
    fn malformed_input_is_rejected() {
        let req = RunRequest {
            input: Some(json!({"forceReady": "all-of-them"})),
            ..Default::default()
        };
        assert!(matches!(
            Input::from_request(&req),
            Err(InputError::Malformed(_))
        ));
    }

    #[test]
    fn absent_input_defaults_to_empty() {
        let input = Input::from_request(&RunRequest::default()).unwrap();
        assert!(input.force_ready.is_empty());
        assert_eq!(input.expected_count(), None);
    }
}
