/// Collaborator traits for Aria
use crate::error::Result;
use crate::pager::Pager;
use crate::types::{MediaItem, PlaylistItem, PlaylistItemId, SearchParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Durable storage for playlist state
///
/// Simple async key-value operations over the ordered sequence and the
/// current-item cursor. Implementations live outside the playlist core
/// (SQLite in `aria-storage`); the playlist treats every failure as
/// non-fatal and keeps its in-memory state authoritative.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Read back the persisted ordered sequence
    async fn get_items(&self) -> Result<Vec<PlaylistItem>>;

    /// Persist the full ordered sequence
    async fn set_items(&self, items: &[PlaylistItem]) -> Result<()>;

    /// Read back the persisted current-item cursor
    async fn get_current_item_id(&self) -> Result<Option<PlaylistItemId>>;

    /// Persist the current-item cursor
    async fn set_current_item_id(&self, id: Option<&PlaylistItemId>) -> Result<()>;
}

/// A source of paged media items
///
/// Service connectors implement this to expose their catalog. The returned
/// pager translates `fetch_at` ranges into the service's own paging API and
/// surfaces HTTP/API failures through its error stream.
pub trait MediaProvider: Send + Sync {
    /// Search the service, returning a lazily fetched result sequence
    fn search(&self, params: &SearchParams) -> Arc<dyn Pager<MediaItem>>;
}
