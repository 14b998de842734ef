//! Error types for catalog API calls.

use thiserror::Error;

use crate::model::ReviewValidationError;

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build endpoints
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS or timeout failure
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered 404
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Any other non-success status
    #[error("Catalog service returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// The body was not the JSON we expected
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The review was rejected before sending
    #[error("Invalid review: {0}")]
    InvalidReview(#[from] ReviewValidationError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short error type string for logs and notices
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client(_) => "client_error",
            ApiError::Transport { .. } => "transport_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidReview(_) => "invalid_review",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ApiError::NotFound {
            url: "https://x/Reviews".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.error_type(), "not_found");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ApiError = ReviewValidationError::EmptyComment.into();
        assert!(!err.is_not_found());
        assert_eq!(err.error_type(), "invalid_review");
        assert!(err.to_string().contains("must not be empty"));
    }
}
