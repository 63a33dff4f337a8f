//! Configuration management for the Spotify API client.
//!
//! Values are read from environment variables, optionally seeded from a
//! `.env` file. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::{Error, Result},
    spotify::{ClientConfig, SPOTIFY_API_BASE},
};

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `sporlapi/.env` in the local data directory.
///
/// The directory is created when missing so users know where to put the file.
/// A missing `.env` file is not an error; everything can be provided through
/// the process environment instead.
///
/// - Linux: `~/.local/share/sporlapi/.env`
/// - macOS: `~/Library/Application Support/sporlapi/.env`
/// - Windows: `%LOCALAPPDATA%/sporlapi/.env`
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Config(format!("{}: {e}", path.display()))),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlapi/.env");
    path
}

/// Web API base URL, `SPOTIFY_API_URL` or the public endpoint.
pub fn spotify_apiurl() -> String {
    non_empty("SPOTIFY_API_URL").unwrap_or_else(|| SPOTIFY_API_BASE.to_string())
}

/// Accounts service token endpoint, `SPOTIFY_API_TOKEN_URL` or the public one.
pub fn spotify_apitoken_url() -> String {
    non_empty("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| SPOTIFY_TOKEN_URL.to_string())
}

/// Client id of the registered application. Required for token refresh.
pub fn spotify_client_id() -> Result<String> {
    non_empty("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok_or_else(|| Error::Config("SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string()))
}

/// Client secret, only set for confidential clients.
pub fn spotify_client_secret() -> Option<String> {
    non_empty("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn request_timeout() -> Result<Duration> {
    match non_empty("SPOTIFY_API_TIMEOUT_SECS") {
        None => Ok(ClientConfig::default().timeout),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| Error::Config(format!("SPOTIFY_API_TIMEOUT_SECS is not a number: {value}"))),
    }
}

/// Client configuration assembled from the environment, without a token.
pub fn client_config() -> Result<ClientConfig> {
    Ok(ClientConfig::default()
        .base_url(spotify_apiurl())
        .timeout(request_timeout()?))
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        // none of these are set in the test environment
        assert_eq!(non_empty("SPORLAPI_SURELY_UNSET_VARIABLE"), None);
        assert_eq!(SPOTIFY_TOKEN_URL, "https://accounts.spotify.com/api/token");
    }

    #[test]
    fn test_env_path_location() {
        assert!(env_path().ends_with("sporlapi/.env"));
    }
}
