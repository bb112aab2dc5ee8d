//! Fixed response envelope shared by all endpoints.
//!
//! Success and failure are signaled through the `status` field of the JSON
//! body, not through HTTP status codes; most error responses still carry
//! HTTP 200. This is a deliberate compatibility contract (see DESIGN.md),
//! with the single exception of the redirect 404.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Outcome marker carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Base response body: `{"status": "OK"}` or `{"status": "Error", "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: Some(message.into()),
        }
    }

    /// Builds an error response enumerating each failing field with a
    /// human-readable reason, e.g. `field URL is a required field`.
    pub fn validation_error(errors: &ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut messages = Vec::new();

        // Fixed field order keeps the message stable across runs.
        for field in ["url", "alias"] {
            let Some(errs) = field_errors.get(field) else {
                continue;
            };
            let name = display_name(field);
            for err in errs.iter() {
                messages.push(match err.code.as_ref() {
                    "required" => format!("field {name} is a required field"),
                    "url" => format!("field {name} is not a valid URL"),
                    _ => format!("field {name} is not valid"),
                });
            }
        }

        Self::error(messages.join(", "))
    }
}

fn display_name(field: &str) -> &'static str {
    match field {
        "url" => "URL",
        "alias" => "Alias",
        _ => "field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_ok_serializes_without_error_field() {
        let body = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "OK"}));
    }

    #[test]
    fn test_error_serializes_status_and_message() {
        let body = serde_json::to_value(ApiResponse::error("not found")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "Error", "error": "not found"})
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("url".into(), ValidationError::new("required"));

        let response = ApiResponse::validation_error(&errors);
        assert_eq!(
            response.error.as_deref(),
            Some("field URL is a required field")
        );

        let mut errors = ValidationErrors::new();
        errors.add("url".into(), ValidationError::new("url"));
        errors.add("alias".into(), ValidationError::new("alias"));

        let response = ApiResponse::validation_error(&errors);
        let message = response.error.unwrap();
        assert!(message.contains("field URL is not a valid URL"));
        assert!(message.contains("field Alias is not valid"));
    }
}
