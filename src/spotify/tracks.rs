use crate::{
    error::Result,
    types::{AudioFeatures, SeveralTracks, Track},
    utils::{Query, require_ids},
};

use super::{Client, Linked, Request};

/// Track catalog endpoints.
#[derive(Debug, Clone)]
pub struct Tracks {
    client: Client,
}

impl Tracks {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves a single track, linked to the client so it can be queued
    /// with `track.queue()`.
    pub async fn get(&self, id: &str, market: Option<&str>) -> Result<Linked<Track>> {
        let url = self.client.endpoint(
            &["tracks", id],
            &Query::new().opt("market", market),
        )?;
        let track: Track = self.client.fetch(Request::get(url)).await?;
        Ok(Linked::new(self.client.clone(), track))
    }

    /// Retrieves up to 50 tracks in one request.
    ///
    /// Unknown ids are left out of the result instead of failing the call.
    ///
    /// # Arguments
    ///
    /// * `ids` - Track ids. Blank entries are dropped
    /// * `market` - Optional ISO 3166-1 alpha-2 country code
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Linked<Track>>)` - The tracks that were found
    /// - `Err(Error::InvalidRequest)` - `ids` holds no usable id; nothing is sent
    pub async fn get_several(&self, ids: &[&str], market: Option<&str>) -> Result<Vec<Linked<Track>>> {
        require_ids(ids)?;
        let url = self.client.endpoint(
            &["tracks"],
            &Query::new().ids("ids", ids).opt("market", market),
        )?;
        let several: SeveralTracks = self.client.fetch(Request::get(url)).await?;

        Ok(several
            .tracks
            .into_iter()
            .flatten()
            .map(|track| Linked::new(self.client.clone(), track))
            .collect())
    }

    /// Retrieves the audio analysis summary of a track.
    ///
    /// # Arguments
    ///
    /// * `id` - Spotify id of the track
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(AudioFeatures)` - Tempo, key and the perceptual measures of the track
    /// - `Err(Error::Api)` - Unknown id, usually `404 Non existing id`
    ///
    /// # Example
    ///
    /// ```
    /// let features = client.tracks().audio_features("11dFghVXANMlKmJXsNCbNl").await?;
    /// println!("{:.0} bpm", features.tempo);
    /// ```
    pub async fn audio_features(&self, id: &str) -> Result<AudioFeatures> {
        let url = self
            .client
            .endpoint(&["audio-features", id], &Query::new())?;
        self.client.fetch(Request::get(url)).await
    }
}
