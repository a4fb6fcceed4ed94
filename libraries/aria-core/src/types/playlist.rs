/// Playlist domain types
use crate::types::{MediaItem, PlaylistItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A media item queued for playback
///
/// Wraps a [`MediaItem`] with queue bookkeeping. Created when the item is
/// inserted into the playlist and destroyed when it is removed; the `id` is
/// unique within the playlist instance even if the same media item is queued
/// twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Unique queue-entry identifier
    pub id: PlaylistItemId,

    /// The underlying media item
    pub media: MediaItem,

    /// When the item was added to the playlist
    pub added_at: DateTime<Utc>,

    /// How many times this entry has been played to completion
    pub play_count: u32,

    /// When this entry last finished playing
    pub last_played_at: Option<DateTime<Utc>>,
}

impl PlaylistItem {
    /// Create a new playlist item for a media item
    pub fn new(media: MediaItem) -> Self {
        Self {
            id: PlaylistItemId::generate(),
            media,
            added_at: Utc::now(),
            play_count: 0,
            last_played_at: None,
        }
    }
}
