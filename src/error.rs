//! Error types for the Spotify client.
//!
//! Every call made through [`crate::spotify::Client`] either resolves with a
//! parsed response or fails with exactly one [`Error`]. The three variants that
//! describe a finished HTTP exchange are:
//!
//! - [`Error::Transport`] - the request never produced a response (DNS failure,
//!   refused connection, timeout, broken body stream)
//! - [`Error::Http`] - a non-2xx response without an interpretable error body
//! - [`Error::Api`] - Spotify answered with a structured error payload, even if
//!   the HTTP status itself looked successful
//!
//! The remaining variants cover failures that happen before a request is sent
//! or after a successful response was classified.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("Spotify API error: {error}")]
    Api { status: u16, error: ApiError },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid Spotify URI: {0}")]
    InvalidUri(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token refresh failed: {0}")]
    Refresh(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of the response that caused the error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::Http { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn http(status: StatusCode) -> Self {
        Error::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// Structured error payload returned by Spotify.
///
/// The Web API reports errors as `{"error": {"status": 404, "message": "..."}}`
/// while the accounts service uses the OAuth shape
/// `{"error": "invalid_grant", "error_description": "..."}`. Both are
/// normalized into this type; `reason` keeps the short error code when one is
/// available (the accounts error name, or the player's `reason` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ApiError {
    /// Extracts the error payload from a response body, if it carries one.
    ///
    /// A missing or `null` `error` field means the body is not an error.
    pub(crate) fn from_body(status: StatusCode, body: &Value) -> Option<Self> {
        let error = body.get("error")?;

        match error {
            Value::Null => None,
            Value::Object(fields) => Some(ApiError {
                status: fields
                    .get("status")
                    .and_then(Value::as_u64)
                    .and_then(|s| u16::try_from(s).ok())
                    .unwrap_or_else(|| status.as_u16()),
                message: fields
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                reason: fields
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            Value::String(code) => Some(ApiError {
                status: status.as_u16(),
                message: body
                    .get("error_description")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| code.clone()),
                reason: Some(code.clone()),
            }),
            other => Some(ApiError {
                status: status.as_u16(),
                message: other.to_string(),
                reason: None,
            }),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{} - {} ({})", self.status, self.message, reason),
            None => write!(f, "{} - {}", self.status, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_web_api_error_shape() {
        let body = json!({"error": {"status": 404, "message": "Non existing id"}});
        let error = ApiError::from_body(StatusCode::NOT_FOUND, &body).unwrap();

        assert_eq!(error.status, 404);
        assert_eq!(error.message, "Non existing id");
        assert_eq!(error.reason, None);
    }

    #[test]
    fn test_accounts_error_shape() {
        let body = json!({"error": "invalid_grant", "error_description": "Invalid refresh token"});
        let error = ApiError::from_body(StatusCode::BAD_REQUEST, &body).unwrap();

        assert_eq!(error.status, 400);
        assert_eq!(error.message, "Invalid refresh token");
        assert_eq!(error.reason.as_deref(), Some("invalid_grant"));
    }

    #[test]
    fn test_embedded_status_wins_over_http_status() {
        let body = json!({"error": {"status": 403, "message": "Player command failed", "reason": "PREMIUM_REQUIRED"}});
        let error = ApiError::from_body(StatusCode::OK, &body).unwrap();

        assert_eq!(error.status, 403);
        assert_eq!(error.reason.as_deref(), Some("PREMIUM_REQUIRED"));
    }

    #[test]
    fn test_body_without_error_field() {
        assert!(ApiError::from_body(StatusCode::OK, &json!({"id": "abc"})).is_none());
        assert!(ApiError::from_body(StatusCode::OK, &json!({"error": null})).is_none());
    }

    #[test]
    fn test_error_status() {
        let err = Error::http(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error: 500 Internal Server Error");
        assert_eq!(Error::Config("missing".into()).status(), None);
    }
}
