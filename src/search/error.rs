//! Search-specific error types
//!
//! Every variant is terminal for the single search invocation that produced
//! it. There is no retry and no partial result.
//!
//! # Error Types
//!
//! - **`MissingApiKey`**: No credential is configured; raised before any request is sent
//! - **`Http`**: Transport failure (DNS, TLS, timeout, connection reset)
//! - **`Status`**: The endpoint answered with a non-2xx status and no usable error body
//! - **`Api`**: The body carried an `error.message`
//! - **`Decode`**: The body was not the JSON shape we expect

use thiserror::Error;

/// Search provider errors
///
/// `Clone` so an outcome can be held in the view after it is applied. The
/// transport error is kept as its display string for that reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No API key configured
    #[error("API key missing")]
    MissingApiKey,

    /// Request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Http(String),

    /// Non-success HTTP status without an API error message
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Error reported by the API in the response body
    #[error("{0}")]
    Api(String),

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Whether this is the configuration error (credential absent)
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = SearchError::Api("The request cannot be completed because you have exceeded your quota.".into());
        assert_eq!(
            err.to_string(),
            "The request cannot be completed because you have exceeded your quota."
        );
    }

    #[test]
    fn test_status_display() {
        let err = SearchError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_is_configuration() {
        assert!(SearchError::MissingApiKey.is_configuration());
        assert!(!SearchError::Decode("eof".into()).is_configuration());
    }
}
