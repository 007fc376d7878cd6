//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Non-success responses from either upstream API.
///
/// The first three variants only come from the Gemini client; the weather
/// client maps every failure to [`UpstreamError::Status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Gemini 400: {0}")]
    InvalidArgument(String),

    #[error("Gemini 401 Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Gemini 404 Not Found: {0}. Check API endpoint and key.")]
    NotFound(String),

    #[error("{service} error (status {status}): {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },
}

impl UpstreamError {
    pub fn status(&self) -> StatusCode {
        match self {
            UpstreamError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            UpstreamError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            UpstreamError::NotFound(_) => StatusCode::NOT_FOUND,
            UpstreamError::Status { status, .. } => *status,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_mentions_status() {
        let err = Error::from(UpstreamError::Unauthorized("API key not valid".to_string()));
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));
        assert!(message.contains("API key not valid"));
    }

    #[test]
    fn test_not_found_message_has_hint() {
        let err = UpstreamError::NotFound("no such model".to_string());
        assert_eq!(
            err.to_string(),
            "Gemini 404 Not Found: no such model. Check API endpoint and key."
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_generic_status_message() {
        let err = UpstreamError::Status {
            service: "Weather API",
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Weather API error (status 500 Internal Server Error): boom"
        );
    }
}
