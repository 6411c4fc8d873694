//! Internal error types for text-generation backends.
//!
//! These errors never leave the crate through the dispatcher: it logs them
//! and reports [`libris_core::ModelOutput::NoContent`] instead.

use thiserror::Error;

/// Result type alias for backend operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Longest response-body excerpt kept in a status error.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors raised by a single backend call.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Connection, timeout, or mid-stream network failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 429 Too Many Requests.
    #[error("Rate limited by backend")]
    RateLimited,

    /// The backend answered with a non-success status.
    #[error("Backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        body: String,
    },

    /// The response could not be decoded into text.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    /// Build a status error, keeping only the start of the body.
    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_is_truncated() {
        let long = "x".repeat(1000);
        let InferenceError::Status { status, body } = InferenceError::status(503, &long) else {
            panic!("expected status error");
        };
        assert_eq!(status, 503);
        assert_eq!(body.len(), BODY_EXCERPT_CHARS);
    }

    #[test]
    fn test_messages() {
        assert_eq!(InferenceError::RateLimited.to_string(), "Rate limited by backend");
        assert!(
            InferenceError::MalformedResponse("missing field".into())
                .to_string()
                .contains("missing field")
        );
    }
}
