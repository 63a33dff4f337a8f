use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of object a Spotify URI or id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Album,
    Artist,
    Episode,
    Playlist,
    Show,
    Track,
    User,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Album => "album",
            ResourceType::Artist => "artist",
            ResourceType::Episode => "episode",
            ResourceType::Playlist => "playlist",
            ResourceType::Show => "show",
            ResourceType::Track => "track",
            ResourceType::User => "user",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "album" => Ok(ResourceType::Album),
            "artist" => Ok(ResourceType::Artist),
            "episode" => Ok(ResourceType::Episode),
            "playlist" => Ok(ResourceType::Playlist),
            "show" => Ok(ResourceType::Show),
            "track" => Ok(ResourceType::Track),
            "user" => Ok(ResourceType::User),
            other => Err(Error::InvalidUri(format!("unknown resource type: {other}"))),
        }
    }
}

/// A `spotify:<type>:<id>` identifier.
///
/// ```
/// use sporlapi::spotify::{ResourceType, SpotifyUri};
///
/// let uri: SpotifyUri = "spotify:track:6rqhFgbbKwnb9MLmUQDhG6".parse()?;
/// assert_eq!(uri.kind, ResourceType::Track);
/// assert_eq!(uri.to_string(), "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
/// # Ok::<(), sporlapi::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpotifyUri {
    pub kind: ResourceType,
    pub id: String,
}

impl SpotifyUri {
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.kind, self.id)
    }
}

impl FromStr for SpotifyUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("spotify"), Some(kind), Some(id), None) if !id.is_empty() => {
                Ok(SpotifyUri::new(kind.parse()?, id))
            }
            _ => Err(Error::InvalidUri(s.to_string())),
        }
    }
}
