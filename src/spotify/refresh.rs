use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Token returned by a [`TokenRefresher`].
///
/// Only `access_token` is required by the client; the other fields mirror the
/// accounts service response so refreshers can pass them along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl RefreshedToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_in: None,
            scope: None,
        }
    }
}

/// Exchanges stored refresh credentials for a new access token.
///
/// The client calls [`request_token`](TokenRefresher::request_token) when a
/// request is rejected with `401 Unauthorized`, at most once per request. How
/// the credentials are stored or rotated is up to the implementation; see
/// [`crate::management::TokenManager`] for a file-backed one.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn request_token(&self) -> Result<RefreshedToken>;
}
