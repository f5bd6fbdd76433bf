//! Remote prompt-optimize host-service contracts and wire types.

use std::collections::BTreeMap;
use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use prompt_engine::Category;

/// Object-safe boxed future used by [`OptimizeService`].
pub type OptimizeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Request payload for the remote optimize endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Free-text prompt to optimize.
    pub prompt: String,
    /// Prompt category selector.
    #[serde(rename = "type")]
    pub category: Category,
    /// Optional advanced constraint fields.
    #[serde(
        rename = "advancedFields",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub advanced_fields: Option<BTreeMap<String, String>>,
}

/// Token accounting reported by the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeUsage {
    /// Tokens consumed by the request.
    #[serde(rename = "promptTokens")]
    pub prompt_tokens: u32,
    /// Tokens produced in the response.
    #[serde(rename = "completionTokens")]
    pub completion_tokens: u32,
}

/// Successful response payload from the remote optimize endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// Optimized prompt text.
    #[serde(rename = "optimizedPrompt")]
    pub optimized_prompt: String,
    /// Optional usage accounting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<OptimizeUsage>,
}

/// Error payload shape returned by the remote endpoint on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeErrorPayload {
    /// Human-readable error message, surfaced verbatim in the UI.
    pub error: String,
}

/// Errors produced by [`OptimizeService`] implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    /// The request never produced a well-formed endpoint response.
    #[error("optimize request failed: {0}")]
    Transport(String),
    /// The endpoint answered with its error payload; the message is shown
    /// verbatim to the user.
    #[error("{0}")]
    Api(String),
}

/// Host service for the remote prompt-optimize endpoint.
pub trait OptimizeService {
    /// Sends one optimize request and resolves with the endpoint's answer.
    fn optimize<'a>(
        &'a self,
        request: &'a OptimizeRequest,
    ) -> OptimizeFuture<'a, Result<OptimizeResponse, OptimizeError>>;
}

/// No-op optimize service for targets without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOptimizeService;

impl OptimizeService for NoopOptimizeService {
    fn optimize<'a>(
        &'a self,
        _request: &'a OptimizeRequest,
    ) -> OptimizeFuture<'a, Result<OptimizeResponse, OptimizeError>> {
        Box::pin(async {
            Err(OptimizeError::Transport(
                "optimize endpoint unavailable on this host".to_string(),
            ))
        })
    }
}

/// Local fallback that renders through [`prompt_engine`] instead of the
/// network, so callers can treat the remote endpoint as replaceable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEchoOptimizeService;

impl OptimizeService for LocalEchoOptimizeService {
    fn optimize<'a>(
        &'a self,
        request: &'a OptimizeRequest,
    ) -> OptimizeFuture<'a, Result<OptimizeResponse, OptimizeError>> {
        Box::pin(async move {
            prompt_engine::render(
                &request.prompt,
                request.category,
                request.advanced_fields.as_ref(),
            )
            .map(|optimized_prompt| OptimizeResponse {
                optimized_prompt,
                usage: None,
            })
            .map_err(|err| OptimizeError::Api(err.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let mut fields = BTreeMap::new();
        fields.insert("style".to_string(), "noir".to_string());
        let request = OptimizeRequest {
            prompt: "a rainy street".to_string(),
            category: Category::Image,
            advanced_fields: Some(fields),
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["type"], "image");
        assert_eq!(value["advancedFields"]["style"], "noir");
        assert_eq!(value["prompt"], "a rainy street");
    }

    #[test]
    fn request_omits_absent_advanced_fields() {
        let request = OptimizeRequest {
            prompt: "hello".to_string(),
            category: Category::Text,
            advanced_fields: None,
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert!(!json.contains("advancedFields"));
    }

    #[test]
    fn response_and_error_payloads_round_trip() {
        let response: OptimizeResponse = serde_json::from_str(
            r#"{"optimizedPrompt":"better","usage":{"promptTokens":10,"completionTokens":32}}"#,
        )
        .expect("response");
        assert_eq!(response.optimized_prompt, "better");
        assert_eq!(
            response.usage,
            Some(OptimizeUsage {
                prompt_tokens: 10,
                completion_tokens: 32
            })
        );

        let payload: OptimizeErrorPayload =
            serde_json::from_str(r#"{"error":"rate limited"}"#).expect("error payload");
        assert_eq!(payload.error, "rate limited");
    }

    #[test]
    fn local_echo_service_renders_through_the_template_engine() {
        let service = LocalEchoOptimizeService;
        let request = OptimizeRequest {
            prompt: "write a haiku".to_string(),
            category: Category::Text,
            advanced_fields: None,
        };
        let response =
            futures::executor::block_on(service.optimize(&request)).expect("local render");
        assert!(response.optimized_prompt.contains("write a haiku"));
        assert_eq!(response.usage, None);
    }

    #[test]
    fn local_echo_service_reports_empty_prompt_as_api_error() {
        let service = LocalEchoOptimizeService;
        let request = OptimizeRequest {
            prompt: "  ".to_string(),
            category: Category::Code,
            advanced_fields: None,
        };
        let err = futures::executor::block_on(service.optimize(&request)).expect_err("must fail");
        assert!(matches!(err, OptimizeError::Api(_)));
    }
}
