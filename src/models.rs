use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable track as returned by the Spotify Web API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>, // Episodes carry no artists
    #[serde(default)]
    pub album: Album, // Episodes carry a show instead of an album
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
}

impl Track {
    /// Name of the first listed artist, if there is one
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|artist| artist.name.as_str())
    }

    pub fn album_name(&self) -> &str {
        &self.album.name
    }
}

/// One page of an offset-paginated listing
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

/// Entry of a playlist's track listing; `track` is null for removed or unavailable items
#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

/// Summary of a user's playlist from the playlists listing
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u32,
}

/// Response structure for the recently-played endpoint (cursor paginated)
#[derive(Debug, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlayHistoryItem {
    pub track: Track,
    pub played_at: DateTime<Utc>,
}
