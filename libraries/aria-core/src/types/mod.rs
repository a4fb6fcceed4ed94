mod ids;
mod media;
mod playlist;

pub use ids::{MediaItemId, PlaylistItemId};
pub use media::{MediaItem, MediaKind, MediaSource, SearchParams};
pub use playlist::PlaylistItem;
