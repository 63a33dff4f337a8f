use serde_json::{Map, Value, json};

use crate::{
    error::{Error, Result},
    types::{Paging, Playlist, PlaylistDetails, PlaylistItem, SimplifiedPlaylist, SnapshotId},
    utils::Query,
};

use super::{Client, Linked, Request, Response};

/// Playlist endpoints.
#[derive(Debug, Clone)]
pub struct Playlists {
    client: Client,
}

impl Playlists {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str, market: Option<&str>) -> Result<Linked<Playlist>> {
        let url = self.client.endpoint(
            &["playlists", id],
            &Query::new().opt("market", market),
        )?;
        let playlist: Playlist = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), playlist))
    }

    pub async fn tracks(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<PlaylistItem>> {
        let url = self.client.endpoint(
            &["playlists", id, "tracks"],
            &Query::new().opt("limit", limit).opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    /// Playlists owned or followed by the current user.
    pub async fn mine(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<SimplifiedPlaylist>> {
        let url = self.client.endpoint(
            &["me", "playlists"],
            &Query::new().opt("limit", limit).opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    pub async fn create(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: Option<&str>,
    ) -> Result<Linked<Playlist>> {
        let mut body = Map::new();
        body.insert("name".to_string(), json!(name));
        body.insert("public".to_string(), json!(public));
        if let Some(description) = description {
            body.insert("description".to_string(), json!(description));
        }

        let url = self
            .client
            .endpoint(&["users", user_id, "playlists"], &Query::new())?;
        let playlist: Playlist = self
            .client
            .fetch(Request::post(url).with_body(Value::Object(body)))
            .await?;
        Ok(Linked::new(self.client.clone(), playlist))
    }

    /// Changes name, visibility or description. Unset fields are left alone.
    pub async fn update(&self, id: &str, details: &PlaylistDetails) -> Result<Response> {
        let url = self
            .client
            .endpoint(&["playlists", id], &Query::new())?;
        self.client
            .send(Request::put(url).with_json(details)?)
            .await
    }

    /// Adds up to 100 items, appended unless `position` is given.
    pub async fn add_tracks(
        &self,
        id: &str,
        uris: &[&str],
        position: Option<u32>,
    ) -> Result<SnapshotId> {
        if uris.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one track URI is required".to_string(),
            ));
        }

        let mut body = json!({ "uris": uris });
        if let Some(position) = position {
            body["position"] = json!(position);
        }

        let url = self
            .client
            .endpoint(&["playlists", id, "tracks"], &Query::new())?;
        self.client
            .fetch(Request::post(url).with_body(body))
            .await
    }

    pub async fn remove_tracks(&self, id: &str, uris: &[&str]) -> Result<SnapshotId> {
        if uris.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one track URI is required".to_string(),
            ));
        }

        let tracks: Vec<Value> = uris.iter().map(|uri| json!({ "uri": uri })).collect();
        let url = self
            .client
            .endpoint(&["playlists", id, "tracks"], &Query::new())?;
        self.client
            .fetch(Request::delete(url).with_body(json!({ "tracks": tracks })))
            .await
    }

    /// Replaces the cover image. `jpeg_base64` is sent as-is, not as JSON.
    pub async fn upload_cover(&self, id: &str, jpeg_base64: &str) -> Result<Response> {
        let url = self
            .client
            .endpoint(&["playlists", id, "images"], &Query::new())?;
        self.client
            .send(
                Request::put(url)
                    .with_header("Content-Type", "image/jpeg")
                    .with_body(jpeg_base64),
            )
            .await
    }
}
