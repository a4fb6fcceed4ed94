//! Media domain types

use crate::types::MediaItemId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable media item from any connected service
///
/// Metadata is eagerly captured at browse time so queue and playback code
/// never have to reach back into a service for display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique item identifier
    pub id: MediaItemId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Track duration
    pub duration: Duration,

    /// Which service or source this item came from
    pub source: MediaSource,

    /// Resolved playback URL, if the source exposes one directly
    pub playback_url: Option<String>,
}

impl MediaItem {
    /// Create a media item with a generated ID and library provenance
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: MediaItemId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration: Duration::ZERO,
            source: MediaSource::Library,
            playback_url: None,
        }
    }
}

/// Provenance of a media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaSource {
    /// Item from the local library
    Library,

    /// Item from a connected remote service
    Service {
        /// Service identifier (e.g. "spotify")
        id: String,
        /// Human-readable service name
        name: String,
    },

    /// Item added from a raw URL
    Url,

    /// Item added from an uploaded file
    File,
}

/// Kind of media object a search should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Individual songs
    Song,
    /// Albums
    Album,
    /// Artists
    Artist,
    /// Service-side playlists
    Playlist,
}

/// Parameters for a media provider search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub query: String,

    /// Restrict results to one kind of media object
    pub kind: Option<MediaKind>,
}

impl SearchParams {
    /// Create search params for a free-text query over all media kinds
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            kind: None,
        }
    }

    /// Restrict the search to one media kind
    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
