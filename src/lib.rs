//! Spotify Web API client library.
//!
//! The core of the crate is [`spotify::Client`]: a shared session holding the
//! access token, a request pipeline that transparently refreshes an expired
//! token once on `401 Unauthorized`, and typed sub-clients for the Web API
//! resources. Around it sit a file-backed token store, environment based
//! configuration and the command-line front end shipped as the `sporlapi`
//! binary.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error and result types shared by all modules
//! - `management` - Token persistence and refresh
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Query building and formatting helpers
//!
//! # Example
//!
//! ```no_run
//! use sporlapi::spotify::Client;
//!
//! #[tokio::main]
//! async fn main() -> sporlapi::Result<()> {
//!     let client = Client::new("access-token")?;
//!     let artist = client.artists().get("0OdUWJ0sBjDrqHygGUXeCF").await?;
//!     println!("{} ({} followers)", artist.name, artist.followers.total);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{ApiError, Error, Result};

/// Boxed error result used by the command-line layer, where errors from the
/// library, clap and the terminal helpers are only ever reported.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```ignore
/// info!("Found {} devices", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a confirmation line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits the process with status 1.
///
/// Only for failures the command cannot continue from, e.g. a missing token:
///
/// ```ignore
/// error!("Failed to load token. Err: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for problems the command can carry on after.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
