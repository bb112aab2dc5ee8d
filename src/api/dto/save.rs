//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;
use validator::{Validate, ValidationError};

use crate::api::response::ApiResponse;

/// Word characters only, 3-20 long. Underscores are accepted alongside
/// alphanumerics; the reference clients use aliases like `test_alias`.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w{3,20}$").unwrap());

/// Request to save a URL mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL. Required; must parse as an absolute URL. A missing
    /// key decodes to `""` so it is reported as a validation failure, not a
    /// decode failure.
    #[serde(default)]
    #[validate(custom(function = validate_target_url))]
    pub url: String,

    /// Optional custom alias. An empty string is treated the same as an
    /// absent field: a 6-character alias is generated instead.
    #[serde(default)]
    #[validate(custom(function = validate_alias))]
    pub alias: Option<String>,
}

/// Response for the save endpoint; echoes the (possibly generated) alias.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias: Some(alias),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: ApiResponse::error(message),
            alias: None,
        }
    }
}

/// The URL field is required and must be a syntactically valid absolute URL.
/// No reachability check is performed.
fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::new("required"));
    }
    if Url::parse(url).is_err() {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    // Empty means "generate one for me"; only non-empty aliases are checked.
    if alias.is_empty() || ALIAS_REGEX.is_match(alias) {
        Ok(())
    } else {
        Err(ValidationError::new("alias"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("https://google.com", Some("test_alias")).validate().is_ok());
        assert!(request("https://google.com", None).validate().is_ok());
    }

    #[test]
    fn test_empty_alias_is_treated_as_absent() {
        assert!(request("https://google.com", Some("")).validate().is_ok());
    }

    #[test]
    fn test_empty_url_reports_required() {
        let errors = request("", Some("some_alias")).validate().unwrap_err();
        let message = ApiResponse::validation_error(&errors).error.unwrap();
        assert!(message.contains("field URL is a required field"));
    }

    #[test]
    fn test_invalid_url_reports_not_a_valid_url() {
        let errors = request("some invalid URL", Some("some_alias"))
            .validate()
            .unwrap_err();
        let message = ApiResponse::validation_error(&errors).error.unwrap();
        assert!(message.contains("field URL is not a valid URL"));
    }

    #[test]
    fn test_alias_length_bounds() {
        assert!(request("https://google.com", Some("ab")).validate().is_err());
        assert!(request("https://google.com", Some("abc")).validate().is_ok());
        assert!(
            request("https://google.com", Some(&"a".repeat(20)))
                .validate()
                .is_ok()
        );
        assert!(
            request("https://google.com", Some(&"a".repeat(21)))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_alias_rejects_non_word_characters() {
        let errors = request("https://google.com", Some("bad alias!"))
            .validate()
            .unwrap_err();
        let message = ApiResponse::validation_error(&errors).error.unwrap();
        assert!(message.contains("field Alias is not valid"));
    }

    #[test]
    fn test_missing_url_key_decodes_to_empty_and_fails_validation() {
        let request: SaveRequest = serde_json::from_str(r#"{"alias": "some_alias"}"#).unwrap();
        assert_eq!(request.url, "");

        let errors = request.validate().unwrap_err();
        let message = ApiResponse::validation_error(&errors).error.unwrap();
        assert!(message.contains("field URL is a required field"));
    }

    #[test]
    fn test_alias_field_defaults_to_none() {
        let request: SaveRequest = serde_json::from_str(r#"{"url": "https://google.com"}"#).unwrap();
        assert!(request.alias.is_none());
    }
}
