/// ID types for Aria entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Media item identifier
///
/// Identifies an item within the catalog of whichever service produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItemId(String);

impl MediaItemId {
    /// Create a media item ID from an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random media item ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist item identifier
///
/// Unique within a playlist instance; generated when the item is queued,
/// so the same media item can appear in the queue more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistItemId(String);

impl PlaylistItemId {
    /// Create a playlist item ID from an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random playlist item ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(PlaylistItemId::generate(), PlaylistItemId::generate());
        assert_ne!(MediaItemId::generate(), MediaItemId::generate());
    }

    #[test]
    fn id_round_trips_through_serde() {
        let id = MediaItemId::new("spotify:track:abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"spotify:track:abc123\"");
        let back: MediaItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
