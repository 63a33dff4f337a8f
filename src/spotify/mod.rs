//! # Spotify Web API Client
//!
//! This module implements the client side of the Spotify Web API: a session
//! object holding the access token, a request pipeline that authenticates and
//! classifies every call, and resource sub-clients that map endpoints onto
//! typed results.
//!
//! ## Architecture
//!
//! ```text
//! Caller
//!    ↓
//! Resource sub-clients (albums, artists, player, playlists, ...)
//!    ↓
//! Client::send  ── 401? ──> TokenRefresher ──> retry once
//!    ↓
//! Request executor (bearer token, JSON or raw body)
//!    ↓
//! Response classifier (Success / Http error / Api error)
//!    ↓
//! reqwest
//! ```
//!
//! ## Request Pipeline
//!
//! [`Client::send`] is the only place network calls are made. It issues the
//! [`Request`] with the session's current token. A `401 Unauthorized` answer
//! with a [`TokenRefresher`] configured leads to exactly one refresh and one
//! retry with the freshly obtained token; every other answer, including the
//! retried one, goes straight to classification:
//!
//! - 2xx with a JSON body resolves to a [`Response`] carrying that body
//! - 2xx without content resolves to the `{"status": <code>}` marker
//! - any JSON body with an `error` field fails with [`crate::Error::Api`],
//!   even when the status code was 2xx
//! - other non-2xx answers fail with [`crate::Error::Http`]
//!
//! Network failures are reported as [`crate::Error::Transport`] and never
//! retried.
//!
//! ## Resource Sub-clients
//!
//! - [`Albums`] - album lookups and album tracks
//! - [`Artists`] - artist lookups, discography, top tracks, related artists
//! - [`Browse`] - new releases, featured playlists, categories
//! - [`Follow`] - following artists, users and playlists
//! - [`Library`] - saved tracks and albums
//! - [`Player`] - playback state and control
//! - [`Playlists`] - playlist lookup, creation and editing
//! - [`Search`] - catalog search
//! - [`Tracks`] - track lookups and audio features
//! - [`Users`] - profiles and personal top lists
//!
//! Single-object lookups return [`Linked`] records which keep a handle to the
//! client, so results can be acted on directly (`album.play()`,
//! `artist.follow()`, `track.queue()`).
//!
//! ## Concurrency
//!
//! [`Client`] is cheap to clone and safe to share between tasks. The token is
//! kept behind a lock that is never held across an await point; a refresh
//! replaces it for all later calls, last write wins.

mod albums;
mod artists;
mod browse;
mod client;
mod follow;
mod library;
mod linked;
mod player;
mod playlists;
mod refresh;
mod request;
mod response;
mod search;
mod tracks;
mod uri;
mod users;

pub use albums::Albums;
pub use artists::{AlbumGroup, Artists};
pub use browse::Browse;
pub use client::{Client, ClientConfig, SPOTIFY_API_BASE};
pub use follow::{Follow, FollowKind};
pub use library::Library;
pub use linked::Linked;
pub use player::{PlayOffset, PlayOptions, Player, RepeatMode};
pub use playlists::Playlists;
pub use refresh::{RefreshedToken, TokenRefresher};
pub use request::{Body, Method, Request};
pub use response::Response;
pub use search::{Search, SearchType};
pub use tracks::Tracks;
pub use uri::{ResourceType, SpotifyUri};
pub use users::{TimeRange, Users};
