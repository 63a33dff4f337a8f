use std::fmt;

use serde::Serialize;
use serde_json::json;

use crate::{
    error::{Error, Result},
    types::{CurrentlyPlaying, Device, Devices, PlaybackState},
    utils::Query,
};

use super::{Client, Request, Response};

/// Where playback should start inside a context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlayOffset {
    Position { position: u32 },
    Uri { uri: String },
}

/// Body of a start/resume playback call.
///
/// An empty value resumes whatever is loaded on the active device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayOptions {
    #[serde(skip)]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlayOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u64>,
}

impl PlayOptions {
    /// Play an album, artist or playlist.
    pub fn context(uri: impl Into<String>) -> Self {
        Self {
            context_uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Play a list of track or episode URIs.
    pub fn uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uris: Some(uris.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn offset(mut self, offset: PlayOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn position_ms(mut self, position_ms: u64) -> Self {
        self.position_ms = Some(position_ms);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    Track,
    Context,
    Off,
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RepeatMode::Track => "track",
            RepeatMode::Context => "context",
            RepeatMode::Off => "off",
        })
    }
}

/// Playback control endpoints under `/me/player`.
///
/// Write operations answer `204 No Content`, so they resolve to the
/// status-marker [`Response`].
#[derive(Debug, Clone)]
pub struct Player {
    client: Client,
}

impl Player {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Current playback state, `None` when nothing is playing.
    pub async fn playback(&self, market: Option<&str>) -> Result<Option<PlaybackState>> {
        let url = self
            .client
            .endpoint(&["me", "player"], &Query::new().opt("market", market))?;
        optional(self.client.send(Request::get(url)).await?)
    }

    pub async fn currently_playing(&self, market: Option<&str>) -> Result<Option<CurrentlyPlaying>> {
        let url = self.client.endpoint(
            &["me", "player", "currently-playing"],
            &Query::new().opt("market", market),
        )?;
        optional(self.client.send(Request::get(url)).await?)
    }

    pub async fn devices(&self) -> Result<Vec<Device>> {
        let url = self.client.endpoint(&["me", "player", "devices"], &Query::new())?;
        let devices: Devices = self.client.fetch(Request::get(url)).await?;
        Ok(devices.devices)
    }

    pub async fn play(&self, options: PlayOptions) -> Result<Response> {
        let url = self.client.endpoint(
            &["me", "player", "play"],
            &Query::new().opt("device_id", options.device_id.as_deref()),
        )?;
        self.client
            .send(Request::put(url).with_json(&options)?)
            .await
    }

    pub async fn pause(&self, device_id: Option<&str>) -> Result<Response> {
        self.command(Request::put, "pause", Query::new(), device_id)
            .await
    }

    pub async fn next(&self, device_id: Option<&str>) -> Result<Response> {
        self.command(Request::post, "next", Query::new(), device_id)
            .await
    }

    pub async fn previous(&self, device_id: Option<&str>) -> Result<Response> {
        self.command(Request::post, "previous", Query::new(), device_id)
            .await
    }

    pub async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<Response> {
        let query = Query::new().param("position_ms", position_ms);
        self.command(Request::put, "seek", query, device_id)
            .await
    }

    pub async fn volume(&self, percent: u8, device_id: Option<&str>) -> Result<Response> {
        if percent > 100 {
            return Err(Error::InvalidRequest(format!(
                "volume must be between 0 and 100, got {percent}"
            )));
        }

        let query = Query::new().param("volume_percent", percent);
        self.command(Request::put, "volume", query, device_id)
            .await
    }

    pub async fn repeat(&self, mode: RepeatMode, device_id: Option<&str>) -> Result<Response> {
        let query = Query::new().param("state", mode);
        self.command(Request::put, "repeat", query, device_id)
            .await
    }

    pub async fn shuffle(&self, state: bool, device_id: Option<&str>) -> Result<Response> {
        let query = Query::new().param("state", state);
        self.command(Request::put, "shuffle", query, device_id)
            .await
    }

    /// Adds a track or episode to the end of the playback queue.
    pub async fn queue(&self, uri: &str, device_id: Option<&str>) -> Result<Response> {
        let query = Query::new().param("uri", uri);
        self.command(Request::post, "queue", query, device_id)
            .await
    }

    pub async fn transfer(&self, device_id: &str, play: bool) -> Result<Response> {
        let url = self.client.endpoint(&["me", "player"], &Query::new())?;
        let body = json!({ "device_ids": [device_id], "play": play });
        self.client.send(Request::put(url).with_body(body)).await
    }

    async fn command(
        &self,
        request: fn(String) -> Request,
        action: &str,
        query: Query,
        device_id: Option<&str>,
    ) -> Result<Response> {
        let url = self.client.endpoint(
            &["me", "player", action],
            &query.opt("device_id", device_id),
        )?;
        self.client.send(request(url)).await
    }
}

fn optional<T: serde::de::DeserializeOwned>(response: Response) -> Result<Option<T>> {
    if response.is_status_marker() {
        return Ok(None);
    }
    response.json().map(Some)
}
