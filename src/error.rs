// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names what went wrong and where. Failures that the pipeline
//! deliberately absorbs (title lookup, image relay) never reach this type's
//! callers; everything here is meant to stop a run.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether the failure is about credentials rather than the request.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::RestrictedResource)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Hatena Blog rejected the entry (status {status}): {body}")]
    PublishRejected { status: u16, body: String },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),

    #[error(transparent)]
    NotionClient(#[from] NotionClientError),
}

impl AppError {
    /// Whether this error came from bad user input or configuration.
    ///
    /// These are reported without a backtrace-style chain by the binary.
    pub fn is_user_facing(&self) -> bool {
        match self {
            AppError::MissingConfiguration(_) | AppError::ValidationError(_) => true,
            AppError::NotionService { code, .. } => code.is_auth_failure(),
            _ => false,
        }
    }
}

/// Failures while decoding Notion bodies into `notion_client` wire objects.
#[derive(Error, Debug)]
pub enum NotionClientError {
    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn test_error_codes_round_trip_through_display() {
        for code in [
            "rate_limited",
            "object_not_found",
            "unauthorized",
            "restricted_resource",
            "validation_error",
            "internal_server_error",
            "service_unavailable",
            "something_new",
        ] {
            assert_eq!(NotionErrorCode::from_api_response(code).to_string(), code);
        }
        assert_eq!(NotionErrorCode::from_http_status(502).to_string(), "http_502");
    }

    #[test]
    fn test_auth_failures() {
        assert!(NotionErrorCode::Unauthorized.is_auth_failure());
        assert!(NotionErrorCode::RestrictedResource.is_auth_failure());
        assert!(!NotionErrorCode::ObjectNotFound.is_auth_failure());
    }

    #[test]
    fn test_user_facing_classification() {
        let invalid: AppError = ValidationError::InvalidId("nope".to_string()).into();
        assert!(invalid.is_user_facing());
        assert!(AppError::MissingConfiguration("NOTION_API_KEY".into()).is_user_facing());
        assert!(!AppError::MalformedResponse("bad".into()).is_user_facing());

        let rejected_key = AppError::NotionService {
            code: NotionErrorCode::Unauthorized,
            message: "API token is invalid.".into(),
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert!(rejected_key.is_user_facing());
        let outage = AppError::NotionService {
            code: NotionErrorCode::ServiceUnavailable,
            message: "down".into(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(!outage.is_user_facing());
    }
}
