use crate::{
    error::Result,
    types::{Album, Paging, SeveralAlbums, SimplifiedTrack},
    utils::{Query, require_ids},
};

use super::{Client, Linked, Request};

/// Album catalog endpoints.
#[derive(Debug, Clone)]
pub struct Albums {
    client: Client,
}

impl Albums {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves a single album from the catalog.
    ///
    /// The album comes back with its first page of tracks and a handle on the
    /// client, so shortcuts like `album.play()` and `album.save()` work on it
    /// directly.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify id of the album, sent as a single path segment
    /// * `market` - Optional ISO 3166-1 alpha-2 country code used for track relinking
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Linked<Album>)` - The album together with the client
    /// - `Err(Error::Api)` - Unknown id or other error payload from the Web API
    /// - `Err(Error::Transport)` - The request never got an answer
    ///
    /// # Example
    ///
    /// ```
    /// let album = client.albums().get("4m2880jivSbbyEGAKfITCa", Some("US")).await?;
    /// println!("{} ({} tracks)", album.name, album.total_tracks);
    /// album.save().await?;
    /// ```
    pub async fn get(&self, id: &str, market: Option<&str>) -> Result<Linked<Album>> {
        let url = self.client.endpoint(
            &["albums", id],
            &Query::new().opt("market", market),
        )?;
        let album: Album = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), album))
    }

    /// Retrieves several albums in one request.
    ///
    /// Ids the catalog does not know come back as `null` and are left out of
    /// the result, so the returned list can be shorter than `ids`.
    ///
    /// # Arguments
    ///
    /// * `ids` - Album ids, up to 20. Blank entries are dropped
    /// * `market` - Optional ISO 3166-1 alpha-2 country code
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Linked<Album>>)` - The albums that were found, in request order
    /// - `Err(Error::InvalidRequest)` - `ids` holds no usable id; nothing is sent
    ///
    /// # Example
    ///
    /// ```
    /// let albums = client
    ///     .albums()
    ///     .get_several(&["4m2880jivSbbyEGAKfITCa", "2noRn2Aes5aoNVsU6iWThc"], None)
    ///     .await?;
    /// ```
    pub async fn get_several(&self, ids: &[&str], market: Option<&str>) -> Result<Vec<Linked<Album>>> {
        require_ids(ids)?;
        let url = self.client.endpoint(
            &["albums"],
            &Query::new().ids("ids", ids).opt("market", market),
        )?;
        let several: SeveralAlbums = self.client.fetch(Request::get(url)).await?;

        Ok(several
            .albums
            .into_iter()
            .flatten()
            .map(|album| Linked::new(self.client.clone(), album))
            .collect())
    }

    /// One page of an album's tracks.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify id of the album
    /// * `limit` - Maximum number of tracks in the page (1-50)
    /// * `offset` - Index of the first track to return
    pub async fn tracks(
        &self,
        id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<SimplifiedTrack>> {
        let url = self.client.endpoint(
            &["albums", id, "tracks"],
            &Query::new().opt("limit", limit).opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }
}
