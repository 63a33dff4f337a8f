use crate::{
    error::Result,
    types::{Categories, Category, FeaturedPlaylists, NewReleases, Paging, SimplifiedAlbum},
    utils::Query,
};

use super::{Client, Request};

/// Browse endpoints: new releases, featured playlists and categories.
#[derive(Debug, Clone)]
pub struct Browse {
    client: Client,
}

impl Browse {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves one page of new album releases featured in Spotify.
    ///
    /// # Arguments
    ///
    /// * `country` - Optional ISO 3166-1 alpha-2 country code to narrow the releases
    /// * `limit` - Maximum number of albums in the page (1-50)
    /// * `offset` - Index of the first album to return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Paging<SimplifiedAlbum>)` - The albums page, unwrapped from the `albums` envelope
    /// - `Err(Error)` - Transport, HTTP or API error
    ///
    /// # Example
    ///
    /// ```
    /// let releases = client.browse().new_releases(Some("SE"), Some(10), None).await?;
    /// for album in releases.items {
    ///     println!("{}", album.name);
    /// }
    /// ```
    pub async fn new_releases(
        &self,
        country: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<SimplifiedAlbum>> {
        let url = self.client.endpoint(
            &["browse", "new-releases"],
            &Query::new()
                .opt("country", country)
                .opt("limit", limit)
                .opt("offset", offset),
        )?;
        let releases: NewReleases = self.client.fetch(Request::get(url)).await?;
        Ok(releases.albums)
    }

    /// Playlists featured by Spotify editors, with the message shown above them.
    ///
    /// `locale` is an ISO 639-1 language code joined with a country code, for
    /// example `es_MX`.
    pub async fn featured_playlists(
        &self,
        country: Option<&str>,
        locale: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<FeaturedPlaylists> {
        let url = self.client.endpoint(
            &["browse", "featured-playlists"],
            &Query::new()
                .opt("country", country)
                .opt("locale", locale)
                .opt("limit", limit)
                .opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    /// One page of the categories used to tag playlists in the Browse tab.
    pub async fn categories(
        &self,
        country: Option<&str>,
        locale: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<Category>> {
        let url = self.client.endpoint(
            &["browse", "categories"],
            &Query::new()
                .opt("country", country)
                .opt("locale", locale)
                .opt("limit", limit)
                .opt("offset", offset),
        )?;
        let categories: Categories = self.client.fetch(Request::get(url)).await?;
        Ok(categories.categories)
    }

    /// Retrieves a single browse category.
    ///
    /// # Arguments
    ///
    /// * `id` - Category id, for example `party`
    /// * `country` - Optional ISO 3166-1 alpha-2 country code
    /// * `locale` - Optional locale for the category name
    pub async fn category(
        &self,
        id: &str,
        country: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Category> {
        let url = self.client.endpoint(
            &["browse", "categories", id],
            &Query::new().opt("country", country).opt("locale", locale),
        )?;
        self.client.fetch(Request::get(url)).await
    }
}
