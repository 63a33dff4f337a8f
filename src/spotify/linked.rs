//! Data records bound to the client that fetched them.
//!
//! [`Linked<T>`] pairs a plain record from [`crate::types`] with a handle to
//! its [`Client`], so follow-up calls can be chained straight off a result:
//!
//! ```no_run
//! # use sporlapi::spotify::Client;
//! # async fn example(client: Client) -> sporlapi::Result<()> {
//! let artist = client.artists().get("0OdUWJ0sBjDrqHygGUXeCF").await?;
//! artist.follow().await?;
//! for track in artist.top_tracks("US").await? {
//!     println!("{}", track.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::ops::Deref;

use crate::{
    error::Result,
    types::{
        Album, Artist, AudioFeatures, Paging, Playlist, SimplifiedAlbum, SimplifiedTrack,
        SnapshotId, Track, User,
    },
};

use super::{Client, PlayOptions, Response, artists::AlbumGroup, follow::FollowKind};

#[derive(Debug, Clone)]
pub struct Linked<T> {
    client: Client,
    data: T,
}

impl<T> Linked<T> {
    pub fn new(client: Client, data: T) -> Self {
        Self { client, data }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for Linked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl Linked<Album> {
    pub async fn play(&self) -> Result<Response> {
        self.client
            .player()
            .play(PlayOptions::context(self.data.uri.clone()))
            .await
    }

    pub async fn tracks(&self) -> Result<Paging<SimplifiedTrack>> {
        self.client.albums().tracks(&self.data.id, None, None).await
    }

    pub async fn save(&self) -> Result<Response> {
        self.client.library().save_albums(&[self.data.id.as_str()]).await
    }

    pub async fn remove(&self) -> Result<Response> {
        self.client.library().remove_albums(&[self.data.id.as_str()]).await
    }
}

impl Linked<Artist> {
    pub async fn play(&self) -> Result<Response> {
        self.client
            .player()
            .play(PlayOptions::context(self.data.uri.clone()))
            .await
    }

    pub async fn follow(&self) -> Result<Response> {
        self.client
            .follow()
            .follow(FollowKind::Artist, &[self.data.id.as_str()])
            .await
    }

    pub async fn unfollow(&self) -> Result<Response> {
        self.client
            .follow()
            .unfollow(FollowKind::Artist, &[self.data.id.as_str()])
            .await
    }

    pub async fn albums(&self) -> Result<Paging<SimplifiedAlbum>> {
        self.client
            .artists()
            .albums(&self.data.id, &[AlbumGroup::Album, AlbumGroup::Single], None, None)
            .await
    }

    pub async fn top_tracks(&self, country: &str) -> Result<Vec<Linked<Track>>> {
        self.client.artists().top_tracks(&self.data.id, country).await
    }

    pub async fn related(&self) -> Result<Vec<Linked<Artist>>> {
        self.client.artists().related(&self.data.id).await
    }
}

impl Linked<Track> {
    pub async fn play(&self) -> Result<Response> {
        self.client
            .player()
            .play(PlayOptions::uris([self.data.uri.clone()]))
            .await
    }

    pub async fn queue(&self) -> Result<Response> {
        self.client.player().queue(&self.data.uri, None).await
    }

    pub async fn save(&self) -> Result<Response> {
        self.client.library().save_tracks(&[self.data.id.as_str()]).await
    }

    pub async fn remove(&self) -> Result<Response> {
        self.client.library().remove_tracks(&[self.data.id.as_str()]).await
    }

    pub async fn audio_features(&self) -> Result<AudioFeatures> {
        self.client.tracks().audio_features(&self.data.id).await
    }
}

impl Linked<Playlist> {
    pub async fn play(&self) -> Result<Response> {
        self.client
            .player()
            .play(PlayOptions::context(self.data.uri.clone()))
            .await
    }

    pub async fn follow(&self) -> Result<Response> {
        self.client
            .follow()
            .follow_playlist(&self.data.id, true)
            .await
    }

    pub async fn unfollow(&self) -> Result<Response> {
        self.client.follow().unfollow_playlist(&self.data.id).await
    }

    pub async fn add_tracks(&self, uris: &[&str]) -> Result<SnapshotId> {
        self.client
            .playlists()
            .add_tracks(&self.data.id, uris, None)
            .await
    }
}

impl Linked<User> {
    pub async fn follow(&self) -> Result<Response> {
        self.client
            .follow()
            .follow(FollowKind::User, &[self.data.id.as_str()])
            .await
    }

    pub async fn unfollow(&self) -> Result<Response> {
        self.client
            .follow()
            .unfollow(FollowKind::User, &[self.data.id.as_str()])
            .await
    }
}
