use std::fmt;

use serde_json::json;

use crate::{
    error::Result,
    types::{Artist, CursorPaging, FollowedArtists},
    utils::{Query, require_ids},
};

use super::{Client, Request, Response};

/// What a follow call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowKind {
    Artist,
    User,
}

impl fmt::Display for FollowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FollowKind::Artist => "artist",
            FollowKind::User => "user",
        })
    }
}

/// Follow and unfollow artists, users and playlists.
#[derive(Debug, Clone)]
pub struct Follow {
    client: Client,
}

impl Follow {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn follow(&self, kind: FollowKind, ids: &[&str]) -> Result<Response> {
        require_ids(ids)?;
        let url = self.following_url(kind, ids)?;
        self.client.send(Request::put(url)).await
    }

    pub async fn unfollow(&self, kind: FollowKind, ids: &[&str]) -> Result<Response> {
        require_ids(ids)?;
        let url = self.following_url(kind, ids)?;
        self.client.send(Request::delete(url)).await
    }

    /// One flag per id, in the order the ids were given.
    pub async fn is_following(&self, kind: FollowKind, ids: &[&str]) -> Result<Vec<bool>> {
        require_ids(ids)?;
        let url = self.client.endpoint(
            &["me", "following", "contains"],
            &Query::new().ids("ids", ids).param("type", kind),
        )?;
        self.client.fetch(Request::get(url)).await
    }

    pub async fn followed_artists(
        &self,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<CursorPaging<Artist>> {
        let url = self.client.endpoint(
            &["me", "following"],
            &Query::new()
                .param("type", FollowKind::Artist)
                .opt("limit", limit)
                .opt("after", after),
        )?;
        let followed: FollowedArtists = self.client.fetch(Request::get(url)).await?;
        Ok(followed.artists)
    }

    pub async fn follow_playlist(&self, id: &str, public: bool) -> Result<Response> {
        let url = self
            .client
            .endpoint(&["playlists", id, "followers"], &Query::new())?;
        self.client
            .send(Request::put(url).with_body(json!({ "public": public })))
            .await
    }

    pub async fn unfollow_playlist(&self, id: &str) -> Result<Response> {
        let url = self
            .client
            .endpoint(&["playlists", id, "followers"], &Query::new())?;
        self.client.send(Request::delete(url)).await
    }

    fn following_url(&self, kind: FollowKind, ids: &[&str]) -> Result<String> {
        self.client.endpoint(
            &["me", "following"],
            &Query::new().ids("ids", ids).param("type", kind),
        )
    }
}
