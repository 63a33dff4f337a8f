use std::fmt;

use serde::Deserialize;

use crate::{
    error::Result,
    types::{Artist, Paging, SeveralArtists, SimplifiedAlbum, Track},
    utils::{Query, require_ids},
};

use super::{Client, Linked, Request};

/// Release groups accepted by the artist albums endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumGroup {
    Album,
    Single,
    AppearsOn,
    Compilation,
}

impl fmt::Display for AlbumGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlbumGroup::Album => "album",
            AlbumGroup::Single => "single",
            AlbumGroup::AppearsOn => "appears_on",
            AlbumGroup::Compilation => "compilation",
        })
    }
}

#[derive(Deserialize)]
struct TopTracks {
    tracks: Vec<Track>,
}

/// Artist catalog endpoints.
#[derive(Debug, Clone)]
pub struct Artists {
    client: Client,
}

impl Artists {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves a single artist, linked to the client for `artist.follow()`
    /// and `artist.top_tracks()`.
    pub async fn get(&self, id: &str) -> Result<Linked<Artist>> {
        let url = self
            .client
            .endpoint(&["artists", id], &Query::new())?;
        let artist: Artist = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), artist))
    }

    /// Retrieves up to 50 artists in one request. Unknown ids are skipped and
    /// an empty `ids` slice fails with [`crate::Error::InvalidRequest`].
    pub async fn get_several(&self, ids: &[&str]) -> Result<Vec<Linked<Artist>>> {
        require_ids(ids)?;
        let url = self
            .client
            .endpoint(&["artists"], &Query::new().ids("ids", ids))?;
        let several: SeveralArtists = self.client.fetch(Request::get(url)).await?;
        Ok(self.link(several.artists.into_iter().flatten()))
    }

    /// Retrieves one page of an artist's albums.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify id of the artist
    /// * `groups` - Release groups to include. An empty slice returns every group
    /// * `limit` - Maximum number of albums in the page (1-50)
    /// * `offset` - Index of the first album to return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Paging<SimplifiedAlbum>)` - The page, with `next` set when more albums exist
    /// - `Err(Error)` - Transport, HTTP or API error
    ///
    /// # Example
    ///
    /// ```
    /// let page = client
    ///     .artists()
    ///     .albums("4tZwfgrHOc3mvqYlEYSvVi", &[AlbumGroup::Album, AlbumGroup::Single], Some(20), None)
    ///     .await?;
    ///
    /// for album in &page.items {
    ///     println!("{} {}", album.release_date, album.name);
    /// }
    /// ```
    pub async fn albums(
        &self,
        id: &str,
        groups: &[AlbumGroup],
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<SimplifiedAlbum>> {
        let include_groups = (!groups.is_empty()).then(|| {
            groups
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });

        let url = self.client.endpoint(
            &["artists", id, "albums"],
            &Query::new()
                .opt("include_groups", include_groups)
                .opt("limit", limit)
                .opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    /// Retrieves an artist's top tracks in a market.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify id of the artist
    /// * `country` - ISO 3166-1 alpha-2 country code, required by the endpoint
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Linked<Track>>)` - Up to 10 tracks, most popular first
    /// - `Err(Error)` - Transport, HTTP or API error
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = client.artists().top_tracks("4tZwfgrHOc3mvqYlEYSvVi", "DE").await?;
    /// if let Some(first) = tracks.first() {
    ///     first.queue().await?;
    /// }
    /// ```
    pub async fn top_tracks(&self, id: &str, country: &str) -> Result<Vec<Linked<Track>>> {
        let url = self.client.endpoint(
            &["artists", id, "top-tracks"],
            &Query::new().param("country", country),
        )?;
        let top: TopTracks = self.client.fetch(Request::get(url)).await?;

        Ok(top
            .tracks
            .into_iter()
            .map(|track| Linked::new(self.client.clone(), track))
            .collect())
    }

    /// Artists similar to the given one, based on listener overlap.
    pub async fn related(&self, id: &str) -> Result<Vec<Linked<Artist>>> {
        let url = self
            .client
            .endpoint(&["artists", id, "related-artists"], &Query::new())?;
        let related: SeveralArtists = self.client.fetch(Request::get(url)).await?;
        Ok(self.link(related.artists.into_iter().flatten()))
    }

    fn link(&self, artists: impl Iterator<Item = Artist>) -> Vec<Linked<Artist>> {
        artists
            .map(|artist| Linked::new(self.client.clone(), artist))
            .collect()
    }
}
