use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    error::{ApiError, Error, Result},
    spotify::{RefreshedToken, TokenRefresher},
    types::Token,
};

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_BUFFER_SECS: u64 = 240;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

/// File-backed token store that refreshes through the accounts service.
///
/// Holds the token pair obtained elsewhere (the authorization flow itself is
/// not part of this crate), refreshes it with the `refresh_token` grant, and
/// writes every refreshed token back to disk. Plugged into a
/// [`crate::spotify::Client`] as its [`TokenRefresher`], it is what makes
/// expired tokens recover transparently:
///
/// ```no_run
/// # use std::sync::Arc;
/// # use sporlapi::{management::TokenManager, spotify::ClientConfig};
/// # async fn example() -> sporlapi::Result<()> {
/// let manager = Arc::new(
///     TokenManager::load("client-id", "https://accounts.spotify.com/api/token").await?,
/// );
/// let client = ClientConfig::default()
///     .token(manager.get_valid_token().await?)
///     .refresher(manager.clone())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct TokenManager {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: Option<String>,
    path: PathBuf,
    token: Mutex<Token>,
    // bumped under the token lock after every successful grant
    generation: AtomicU64,
}

impl TokenManager {
    pub fn new(token: Token, client_id: impl Into<String>, token_url: impl Into<String>) -> Self {
        TokenManager {
            http: reqwest::Client::new(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: None,
            path: Self::token_path(),
            token: Mutex::new(token),
            generation: AtomicU64::new(0),
        }
    }

    /// Store the token somewhere other than the default data directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Authenticate refresh calls with a client secret (confidential clients).
    pub fn with_client_secret(mut self, secret: Option<String>) -> Self {
        self.client_secret = secret.filter(|s| !s.is_empty());
        self
    }

    pub async fn load(client_id: impl Into<String>, token_url: impl Into<String>) -> Result<Self> {
        Self::load_from(Self::token_path(), client_id, token_url).await
    }

    pub async fn load_from(
        path: impl AsRef<Path>,
        client_id: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content = async_fs::read_to_string(path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self::new(token, client_id, token_url).with_path(path))
    }

    pub async fn persist(&self) -> Result<()> {
        let token = self.token.lock().await;
        self.write(&token).await
    }

    async fn write(&self, token: &Token) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Current access token, refreshed first if it is about to expire.
    pub async fn get_valid_token(&self) -> Result<String> {
        let seen = self.generation.load(Ordering::Acquire);
        let current = self.current_token().await;
        if !Self::is_expired(&current) {
            return Ok(current.access_token);
        }

        debug!(target: "spotify", "stored access token expired, refreshing");
        Ok(self.refresh(seen).await?.access_token)
    }

    pub async fn current_token(&self) -> Token {
        self.token.lock().await.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp().max(0) as u64;
        let expires_at = token.obtained_at.saturating_add(token.expires_in);
        now >= expires_at.saturating_sub(EXPIRY_BUFFER_SECS)
    }

    /// Runs the `refresh_token` grant while holding the token lock.
    ///
    /// `seen` is the grant generation the caller observed before it decided
    /// to refresh. A caller that queued behind a grant which has since
    /// completed gets that grant's token back, so each refresh token is
    /// spent at most once.
    async fn refresh(&self, seen: u64) -> Result<Token> {
        let mut stored = self.token.lock().await;
        if self.generation.load(Ordering::Acquire) != seen {
            debug!(target: "spotify", "token refreshed while waiting, reusing it");
            return Ok(stored.clone());
        }

        let mut request = self.http.post(&self.token_url).form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", stored.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
        ]);
        if let Some(secret) = &self.client_secret {
            request = request.basic_auth(&self.client_id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Refresh(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Refresh(e.to_string()))?;

        if !status.is_success() {
            let reason = serde_json::from_slice(&body)
                .ok()
                .and_then(|value| ApiError::from_body(status, &value))
                .map(|error| error.to_string())
                .unwrap_or_else(|| status.to_string());
            return Err(Error::Refresh(reason));
        }

        let fresh: TokenResponse =
            serde_json::from_slice(&body).map_err(|e| Error::Refresh(e.to_string()))?;

        let token = Token {
            access_token: fresh.access_token,
            // the accounts service only sometimes rotates the refresh token
            refresh_token: fresh
                .refresh_token
                .unwrap_or_else(|| stored.refresh_token.clone()),
            scope: fresh.scope.unwrap_or_else(|| stored.scope.clone()),
            expires_in: fresh.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp().max(0) as u64,
        };
        *stored = token.clone();
        self.generation.fetch_add(1, Ordering::AcqRel);

        self.write(&token).await?;
        Ok(token)
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sporlapi/cache/token.json");
        path
    }
}

#[async_trait]
impl TokenRefresher for TokenManager {
    async fn request_token(&self) -> Result<RefreshedToken> {
        let seen = self.generation.load(Ordering::Acquire);
        let token = self.refresh(seen).await?;

        Ok(RefreshedToken {
            access_token: token.access_token,
            refresh_token: Some(token.refresh_token),
            expires_in: Some(token.expires_in),
            scope: Some(token.scope),
        })
    }
}
