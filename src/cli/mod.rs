//! # CLI Module
//!
//! Command-line front end of the `sporlapi` binary. Every command builds a
//! [`Client`] through [`connect`], performs one or two Web API calls and
//! renders the result with the colored output macros and `tabled` tables.
//!
//! ## Commands
//!
//! - [`import_token`] / [`show_token`] - store and inspect the token pair
//! - [`me`] - current user profile
//! - [`artist`] - artist details, top tracks, follow
//! - [`album`] - album details and track list, play or save it
//! - [`search`] - catalog search
//! - [`player_status`], [`player_devices`], [`player_command`] - playback
//!
//! ## Token Handling
//!
//! The stored token is loaded by [`TokenManager`], refreshed up front when it
//! is about to expire and then installed on the client together with the
//! manager as refresher. A token that is revoked early is therefore still
//! recovered by the client's retry on `401 Unauthorized`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporlapi token import --access <token> --refresh <token>
//! sporlapi me
//! sporlapi artist 0OdUWJ0sBjDrqHygGUXeCF --top-tracks
//! sporlapi search "daft punk" --type album --type track
//! sporlapi player status
//! ```

mod albums;
mod artists;
mod player;
mod search;
mod token;
mod users;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

pub use albums::album;
pub use artists::artist;
pub use player::{PlayerAction, player_command, player_devices, player_status};
pub use search::search;
pub use token::{import_token, show_token};
pub use users::me;

use crate::{config, error, management::TokenManager, spotify::Client};

/// Builds a client from the environment and the stored token.
///
/// Exits the program with a message when no token has been imported yet or
/// the configuration is incomplete.
pub async fn connect() -> Client {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let manager = match TokenManager::load(client_id, config::spotify_apitoken_url()).await {
        Ok(m) => m.with_client_secret(config::spotify_client_secret()),
        Err(e) => error!(
            "Failed to load token. Please run sporlapi token import\n Error: {}",
            e
        ),
    };
    let manager = Arc::new(manager);

    let token = match manager.get_valid_token().await {
        Ok(t) => t,
        Err(e) => error!("Cannot refresh access token. Err: {}", e),
    };

    let client_config = match config::client_config() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    match client_config.token(token).refresher(manager).build() {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
