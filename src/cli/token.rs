use chrono::{DateTime, Utc};

use crate::{
    config, error, info,
    management::TokenManager,
    success,
    types::Token,
    warning,
};

/// Stores an access/refresh token pair obtained through the authorization flow.
pub async fn import_token(access: String, refresh: String, expires_in: u64, scope: Option<String>) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let token = Token {
        access_token: access,
        refresh_token: refresh,
        scope: scope.unwrap_or_default(),
        expires_in,
        obtained_at: Utc::now().timestamp().max(0) as u64,
    };

    let manager = TokenManager::new(token, client_id, config::spotify_apitoken_url());
    if let Err(e) = manager.persist().await {
        error!("Failed to store token. Err: {}", e);
    }

    success!("Token stored at {}", manager.path().display());
}

pub async fn show_token() {
    let client_id = config::spotify_client_id().unwrap_or_default();
    let manager = match TokenManager::load(client_id, config::spotify_apitoken_url()).await {
        Ok(m) => m,
        Err(e) => error!(
            "No stored token. Please run sporlapi token import\n Error: {}",
            e
        ),
    };

    let token = manager.current_token().await;
    let expires_at = token.obtained_at.saturating_add(token.expires_in);

    info!("Stored at {}", manager.path().display());
    info!("Access token: {}", mask(&token.access_token));
    if !token.scope.is_empty() {
        info!("Scope: {}", token.scope);
    }

    match DateTime::<Utc>::from_timestamp(expires_at as i64, 0) {
        Some(at) if at > Utc::now() => info!("Expires at {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        Some(at) => warning!(
            "Expired at {}, it will be refreshed on next use",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => warning!("Token carries an invalid expiry"),
    }
}

fn mask(token: &str) -> String {
    let visible: String = token.chars().take(8).collect();
    format!("{visible}…")
}
