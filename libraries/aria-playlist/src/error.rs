//! Error types for playlist management

use aria_core::types::PlaylistItemId;
use thiserror::Error;

/// Playlist errors
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The referenced item is not in the playlist
    #[error("Item not in playlist: {0}")]
    ItemNotInPlaylist(PlaylistItemId),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
