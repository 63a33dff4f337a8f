use crate::{
    error::Result,
    types::{Paging, SavedAlbum, SavedTrack},
    utils::{Query, require_ids},
};

use super::{Client, Request, Response};

/// The current user's saved tracks and albums ("Your Music").
#[derive(Debug, Clone)]
pub struct Library {
    client: Client,
}

impl Library {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// One page of the tracks saved in the user's library, newest first.
    ///
    /// Requires the `user-library-read` scope.
    pub async fn saved_tracks(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Paging<SavedTrack>> {
        let url = self.client.endpoint(
            &["me", "tracks"],
            &Query::new().opt("limit", limit).opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    /// One page of the albums saved in the user's library.
    pub async fn saved_albums(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Paging<SavedAlbum>> {
        let url = self.client.endpoint(
            &["me", "albums"],
            &Query::new().opt("limit", limit).opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    /// Saves tracks to the user's library.
    ///
    /// # Arguments
    ///
    /// * `ids` - Track ids, up to 50. Blank entries are dropped
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Response)` - The status marker, since the endpoint answers without content
    /// - `Err(Error::InvalidRequest)` - `ids` holds no usable id; nothing is sent
    /// - `Err(Error::Api)` - Usually a missing `user-library-modify` scope
    ///
    /// # Example
    ///
    /// ```
    /// let response = client.library().save_tracks(&["7ouMYWpwJ422jRcDASZB7P"]).await?;
    /// assert!(response.is_status_marker());
    /// ```
    pub async fn save_tracks(&self, ids: &[&str]) -> Result<Response> {
        self.write(Request::put, "tracks", ids).await
    }

    /// Removes tracks from the user's library. Same contract as [`Self::save_tracks`].
    pub async fn remove_tracks(&self, ids: &[&str]) -> Result<Response> {
        self.write(Request::delete, "tracks", ids).await
    }

    /// Checks which tracks are saved in the user's library.
    ///
    /// # Arguments
    ///
    /// * `ids` - Track ids, up to 50
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<bool>)` - One flag per id, in request order
    /// - `Err(Error::InvalidRequest)` - `ids` holds no usable id
    ///
    /// # Example
    ///
    /// ```
    /// let saved = client.library().has_tracks(&["7ouMYWpwJ422jRcDASZB7P", "4VqPOruhp5EdPBeR92t6lQ"]).await?;
    /// ```
    pub async fn has_tracks(&self, ids: &[&str]) -> Result<Vec<bool>> {
        self.contains("tracks", ids).await
    }

    /// Saves albums to the user's library. Same contract as [`Self::save_tracks`].
    pub async fn save_albums(&self, ids: &[&str]) -> Result<Response> {
        self.write(Request::put, "albums", ids).await
    }

    /// Removes albums from the user's library.
    pub async fn remove_albums(&self, ids: &[&str]) -> Result<Response> {
        self.write(Request::delete, "albums", ids).await
    }

    /// Checks which albums are saved, one flag per id in request order.
    pub async fn has_albums(&self, ids: &[&str]) -> Result<Vec<bool>> {
        self.contains("albums", ids).await
    }

    async fn write(&self, request: fn(String) -> Request, kind: &str, ids: &[&str]) -> Result<Response> {
        require_ids(ids)?;
        let url = self
            .client
            .endpoint(&["me", kind], &Query::new().ids("ids", ids))?;
        self.client.send(request(url)).await
    }

    async fn contains(&self, kind: &str, ids: &[&str]) -> Result<Vec<bool>> {
        require_ids(ids)?;
        let url = self
            .client
            .endpoint(&["me", kind, "contains"], &Query::new().ids("ids", ids))?;
        self.client.fetch(Request::get(url)).await
    }
}
