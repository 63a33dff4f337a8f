use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    types::SearchResults,
    utils::Query,
};

use super::{Client, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        })
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "album" => Ok(SearchType::Album),
            "artist" => Ok(SearchType::Artist),
            "playlist" => Ok(SearchType::Playlist),
            "track" => Ok(SearchType::Track),
            other => Err(Error::InvalidRequest(format!("unknown search type: {other}"))),
        }
    }
}

/// Catalog search.
#[derive(Debug, Clone)]
pub struct Search {
    client: Client,
}

impl Search {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Searches the catalog. Each requested type gets its own page in the
    /// result; types that were not requested stay `None`.
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: Option<u32>,
        offset: Option<u32>,
        market: Option<&str>,
    ) -> Result<SearchResults> {
        if query.trim().is_empty() {
            return Err(Error::InvalidRequest("search query is empty".to_string()));
        }
        if types.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one search type is required".to_string(),
            ));
        }

        let types = types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let url = self.client.endpoint(
            &["search"],
            &Query::new()
                .param("q", query)
                .param("type", types)
                .opt("limit", limit)
                .opt("offset", offset)
                .opt("market", market),
        )?;
        self.client.fetch(Request::get(url)).await
    }
}
