use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use sporlapi::{
    cli::{self, PlayerAction},
    config, error,
    spotify::SearchType,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Store or inspect the Spotify access token
    Token(TokenOptions),

    /// Show the current user's profile
    Me,

    /// Show an artist
    Artist(ArtistOptions),

    /// Show an album and its tracks
    Album(AlbumOptions),

    /// Search the Spotify catalog
    Search(SearchOptions),

    /// Inspect and control playback
    Player(PlayerOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TokenSubcommand {
    /// Import a token pair obtained through the authorization flow
    Import(TokenImportOpts),

    /// Show the stored token and its expiry
    Show,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenImportOpts {
    /// Access token
    #[clap(long)]
    pub access: String,

    /// Refresh token
    #[clap(long)]
    pub refresh: String,

    /// Lifetime of the access token in seconds
    #[clap(long, default_value_t = 3600)]
    pub expires_in: u64,

    /// Granted scopes, space separated
    #[clap(long)]
    pub scope: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Spotify artist id
    pub id: String,

    /// List the artist's top tracks
    #[clap(long)]
    pub top_tracks: bool,

    /// Market for the top tracks
    #[clap(long, default_value = "US")]
    pub country: String,

    /// Follow the artist
    #[clap(long)]
    pub follow: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Spotify album id
    pub id: String,

    /// Start playing the album on the active device
    #[clap(long)]
    pub play: bool,

    /// Save the album to your library
    #[clap(long)]
    pub save: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Result type(s) to include; can be repeated
    #[clap(long = "type", action = ArgAction::Append, num_args = 1)]
    pub types: Vec<SearchType>,

    /// Maximum number of results per type
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayerOptions {
    #[command(subcommand)]
    pub command: PlayerSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlayerSubcommand {
    /// Show what is playing
    Status,

    /// Resume playback, or play an album, playlist or track URI
    Play {
        /// Spotify URI to play
        uri: Option<String>,
    },

    /// Pause playback
    Pause,

    /// Skip to the next track
    Next,

    /// Skip to the previous track
    Previous,

    /// List available devices
    Devices,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Token(opt) => match opt.command {
            TokenSubcommand::Import(t) => {
                cli::import_token(t.access, t.refresh, t.expires_in, t.scope).await
            }
            TokenSubcommand::Show => cli::show_token().await,
        },
        Command::Me => cli::me().await,
        Command::Artist(opt) => cli::artist(opt.id, opt.top_tracks, opt.country, opt.follow).await,
        Command::Album(opt) => cli::album(opt.id, opt.play, opt.save).await,
        Command::Search(opt) => cli::search(opt.query, opt.types, opt.limit).await,
        Command::Player(opt) => match opt.command {
            PlayerSubcommand::Status => cli::player_status().await,
            PlayerSubcommand::Devices => cli::player_devices().await,
            PlayerSubcommand::Play { uri } => cli::player_command(PlayerAction::Play { uri }).await,
            PlayerSubcommand::Pause => cli::player_command(PlayerAction::Pause).await,
            PlayerSubcommand::Next => cli::player_command(PlayerAction::Next).await,
            PlayerSubcommand::Previous => cli::player_command(PlayerAction::Previous).await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
