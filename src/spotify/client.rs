use std::{
    fmt,
    sync::{Arc, RwLock},
    time::Duration,
};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::{Error, Result},
    utils::{self, Query},
};

use super::{
    albums::Albums,
    artists::Artists,
    browse::Browse,
    follow::Follow,
    library::Library,
    player::Player,
    playlists::Playlists,
    refresh::TokenRefresher,
    request::{self, Request},
    response::{self, Response},
    search::Search,
    tracks::Tracks,
    users::Users,
};

pub const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";

/// Settings used to build a [`Client`].
///
/// Every field has a sensible default, so only what differs needs to be set:
///
/// ```
/// use std::time::Duration;
/// use sporlapi::spotify::ClientConfig;
///
/// let client = ClientConfig::default()
///     .token("BQC...")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), sporlapi::Error>(())
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Base host plus version prefix, e.g. `https://api.spotify.com/v1`.
    pub base_url: String,
    pub access_token: Option<String>,
    pub refresher: Option<Arc<dyn TokenRefresher>>,
    pub timeout: Duration,
    /// Refresh and retry once on `401 Unauthorized` when a refresher is set.
    pub auto_refresh: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SPOTIFY_API_BASE.to_string(),
            access_token: None,
            refresher: None,
            timeout: Duration::from_secs(30),
            auto_refresh: true,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("refresher", &self.refresher.is_some())
            .field("timeout", &self.timeout)
            .field("auto_refresh", &self.auto_refresh)
            .finish()
    }
}

impl ClientConfig {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn build(self) -> Result<Client> {
        Client::with_config(self)
    }
}

struct Session {
    http: reqwest::Client,
    base_url: String,
    auto_refresh: bool,
    token: RwLock<String>,
    refresher: RwLock<Option<Arc<dyn TokenRefresher>>>,
}

/// Spotify Web API session.
///
/// Holds the current access token and an optional [`TokenRefresher`]. Clones
/// share the same session, so a token refreshed through one clone is used by
/// every later call on any of them.
///
/// Resource sub-clients are reached through accessors:
///
/// ```no_run
/// # use sporlapi::spotify::Client;
/// # async fn example() -> sporlapi::Result<()> {
/// let client = Client::new("BQC...")?;
/// let album = client.albums().get("4aawyAB9vmqN3uQ7FjRGTy", None).await?;
/// album.play().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<Session>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .field("auto_refresh", &self.inner.auto_refresh)
            .field("refresher", &self.refresher().is_some())
            .finish()
    }
}

impl Client {
    /// Creates a client for the public API with the given access token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        ClientConfig::default().token(token).build()
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::Config("base URL must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sporlapi/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(Session {
                http,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                auto_refresh: config.auto_refresh,
                token: RwLock::new(config.access_token.unwrap_or_default()),
                refresher: RwLock::new(config.refresher),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The access token that the next request will be sent with.
    pub fn token(&self) -> String {
        match self.inner.token.read() {
            Ok(token) => token.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        match self.inner.token.write() {
            Ok(mut current) => *current = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    pub fn refresher(&self) -> Option<Arc<dyn TokenRefresher>> {
        match self.inner.refresher.read() {
            Ok(refresher) => refresher.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_refresher(&self, refresher: Arc<dyn TokenRefresher>) {
        self.replace_refresher(Some(refresher));
    }

    pub fn clear_refresher(&self) {
        self.replace_refresher(None);
    }

    fn replace_refresher(&self, refresher: Option<Arc<dyn TokenRefresher>>) {
        match self.inner.refresher.write() {
            Ok(mut current) => *current = refresher,
            Err(poisoned) => *poisoned.into_inner() = refresher,
        }
    }

    /// Sends `request` and classifies the response.
    ///
    /// A `401 Unauthorized` answer triggers one call to the configured
    /// refresher. If it produces a token, the session token is replaced and
    /// the request is issued a second time with that token; whatever the
    /// second response is, it gets classified as-is. If no refresher is set,
    /// or it fails, the original `401` is classified. No more than two
    /// requests are ever sent per call.
    pub async fn send(&self, request: Request) -> Result<Response> {
        let token = self.token();
        let response = request::execute(&self.inner.http, &request, &token).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return response::classify(response).await;
        }

        let refresher = match self.refresher() {
            Some(refresher) if self.inner.auto_refresh => refresher,
            _ => return response::classify(response).await,
        };

        debug!(target: "spotify", "access token rejected, refreshing: {}", request.path());

        let fresh = match refresher.request_token().await {
            Ok(fresh) => fresh.access_token,
            Err(e) => {
                debug!(target: "spotify", "token refresh failed: {}", e);
                return response::classify(response).await;
            }
        };

        self.set_token(fresh.clone());

        let retried = request::execute(&self.inner.http, &request, &fresh).await?;
        response::classify(retried).await
    }

    /// Sends `request` and decodes the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.send(request).await?.json()
    }

    /// Absolute URL for the path `segments` below the configured base URL.
    /// Each segment is percent-encoded on its own.
    pub fn endpoint(&self, segments: &[&str], query: &Query) -> Result<String> {
        utils::endpoint(&self.inner.base_url, segments, query)
    }

    pub fn albums(&self) -> Albums {
        Albums::new(self.clone())
    }

    pub fn artists(&self) -> Artists {
        Artists::new(self.clone())
    }

    pub fn browse(&self) -> Browse {
        Browse::new(self.clone())
    }

    pub fn follow(&self) -> Follow {
        Follow::new(self.clone())
    }

    pub fn library(&self) -> Library {
        Library::new(self.clone())
    }

    pub fn player(&self) -> Player {
        Player::new(self.clone())
    }

    pub fn playlists(&self) -> Playlists {
        Playlists::new(self.clone())
    }

    pub fn search(&self) -> Search {
        Search::new(self.clone())
    }

    pub fn tracks(&self) -> Tracks {
        Tracks::new(self.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.clone())
    }
}
