use std::fmt;

use crate::{
    error::Result,
    types::{Artist, Paging, Track, User},
    utils::Query,
};

use super::{Client, Linked, Request};

/// Time frame for the personal top lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        })
    }
}

/// User profiles and personalization.
#[derive(Debug, Clone)]
pub struct Users {
    client: Client,
}

impl Users {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Profile of the user the access token belongs to.
    pub async fn me(&self) -> Result<Linked<User>> {
        let url = self.client.endpoint(&["me"], &Query::new())?;
        let user: User = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), user))
    }

    pub async fn get(&self, id: &str) -> Result<Linked<User>> {
        let url = self
            .client
            .endpoint(&["users", id], &Query::new())?;
        let user: User = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), user))
    }

    pub async fn top_artists(
        &self,
        range: TimeRange,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<Artist>> {
        self.top("artists", range, limit, offset).await
    }

    pub async fn top_tracks(
        &self,
        range: TimeRange,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<Track>> {
        self.top("tracks", range, limit, offset).await
    }

    async fn top<T: serde::de::DeserializeOwned>(
        &self,
        kind: &str,
        range: TimeRange,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paging<T>> {
        let url = self.client.endpoint(
            &["me", "top", kind],
            &Query::new()
                .param("time_range", range)
                .opt("limit", limit)
                .opt("offset", offset),
        )?;
        self.client.fetch(Request::get(url)).await
    }
}
