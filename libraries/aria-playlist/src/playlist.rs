//! Playback queue state machine
//!
//! An ordered sequence of [`PlaylistItem`]s with a single current-item
//! cursor, persisted through a [`PlaylistStore`] collaborator. The queue is
//! the process-wide source of truth for what plays next; playback itself is
//! driven externally by observing the cursor.

use crate::error::{PlaylistError, Result};
use aria_core::traits::PlaylistStore;
use aria_core::types::{MediaItem, PlaylistItem, PlaylistItemId};
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::warn;

/// Receiver for playlist snapshots
pub type SnapshotReceiver = watch::Receiver<PlaylistSnapshot>;

/// The ordered sequence and cursor, read together
///
/// Published as one value so a reader never sees a sequence from one
/// mutation paired with a cursor from another.
#[derive(Debug, Clone)]
pub struct PlaylistSnapshot {
    /// Queue contents in playback order
    pub items: Arc<[PlaylistItem]>,

    /// The item currently loaded for playback, if any
    pub current: Option<PlaylistItemId>,
}

impl Default for PlaylistSnapshot {
    fn default() -> Self {
        Self {
            items: Vec::new().into(),
            current: None,
        }
    }
}

impl PlaylistSnapshot {
    /// Position of the cursor in the sequence
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current.as_ref()?;
        self.items.iter().position(|item| &item.id == current)
    }

    /// The item under the cursor
    pub fn current_item(&self) -> Option<&PlaylistItem> {
        self.current_index().map(|index| &self.items[index])
    }

    /// The item immediately after the cursor
    pub fn next_item(&self) -> Option<&PlaylistItem> {
        self.items.get(self.current_index()? + 1)
    }

    /// The item immediately before the cursor
    pub fn previous_item(&self) -> Option<&PlaylistItem> {
        self.items.get(self.current_index()?.checked_sub(1)?)
    }

    /// Whether the cursor sits on the first item
    pub fn at_start(&self) -> bool {
        self.current_index() == Some(0)
    }

    /// Whether the cursor sits on the last item
    pub fn at_end(&self) -> bool {
        self.current_index()
            .map_or(false, |index| index + 1 == self.items.len())
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct PlaylistState {
    items: Vec<PlaylistItem>,
    current: Option<PlaylistItemId>,
}

/// The playback queue
///
/// Mutations are serialized behind one lock and never hold it across the
/// persistence write's failure handling in a way that could tear a reader:
/// each mutation publishes its snapshot before the write starts, and the
/// in-memory state stays authoritative when the write fails.
pub struct Playlist {
    store: Arc<dyn PlaylistStore>,
    state: Mutex<PlaylistState>,
    snapshot: watch::Sender<PlaylistSnapshot>,
}

impl Playlist {
    /// Create an empty playlist over the given store
    pub fn new(store: Arc<dyn PlaylistStore>) -> Self {
        Self::with_state(store, Vec::new(), None)
    }

    /// Restore a playlist from its store
    ///
    /// Read failures are logged and treated as an empty previous session. A
    /// persisted cursor pointing at an item that is no longer present is
    /// dropped.
    pub async fn load(store: Arc<dyn PlaylistStore>) -> Self {
        let items = match store.get_items().await {
            Ok(items) => items,
            Err(error) => {
                warn!(%error, "failed to load playlist items, starting empty");
                Vec::new()
            }
        };
        let current = match store.get_current_item_id().await {
            Ok(current) => current,
            Err(error) => {
                warn!(%error, "failed to load current item, starting unset");
                None
            }
        };
        let current = current.filter(|id| items.iter().any(|item| &item.id == id));
        Self::with_state(store, items, current)
    }

    fn with_state(
        store: Arc<dyn PlaylistStore>,
        items: Vec<PlaylistItem>,
        current: Option<PlaylistItemId>,
    ) -> Self {
        let snapshot = PlaylistSnapshot {
            items: items.clone().into(),
            current: current.clone(),
        };
        Self {
            store,
            state: Mutex::new(PlaylistState { items, current }),
            snapshot: watch::channel(snapshot).0,
        }
    }

    // === Queries ===

    /// Observe snapshots of the queue
    pub fn observe(&self) -> SnapshotReceiver {
        self.snapshot.subscribe()
    }

    /// The latest snapshot
    pub fn snapshot(&self) -> PlaylistSnapshot {
        self.snapshot.borrow().clone()
    }

    /// The item currently loaded for playback
    pub fn current(&self) -> Option<PlaylistItem> {
        self.snapshot.borrow().current_item().cloned()
    }

    /// The item that would play after the current one
    pub fn next(&self) -> Option<PlaylistItem> {
        self.snapshot.borrow().next_item().cloned()
    }

    /// The item that played before the current one
    pub fn previous(&self) -> Option<PlaylistItem> {
        self.snapshot.borrow().previous_item().cloned()
    }

    /// Whether the cursor sits on the first item
    pub fn at_start(&self) -> bool {
        self.snapshot.borrow().at_start()
    }

    /// Whether the cursor sits on the last item
    pub fn at_end(&self) -> bool {
        self.snapshot.borrow().at_end()
    }

    /// Queue contents in playback order
    pub fn items(&self) -> Arc<[PlaylistItem]> {
        self.snapshot.borrow().items.clone()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }

    // === Mutations ===

    /// Splice media items into the queue at the given index
    ///
    /// The index is clamped to `[0, len]`. The cursor does not move unless
    /// the queue was empty, in which case the first inserted item becomes
    /// current.
    pub async fn insert(&self, media: Vec<MediaItem>, at: usize) {
        let mut state = self.state.lock().await;
        let at = at.min(state.items.len());
        let was_empty = state.items.is_empty();
        let new_items: Vec<PlaylistItem> = media.into_iter().map(PlaylistItem::new).collect();
        let first_inserted = new_items.first().map(|item| item.id.clone());
        state.items.splice(at..at, new_items);
        if was_empty {
            state.current = first_inserted;
        }
        self.commit(&state).await;
    }

    /// Append media items at the end of the queue
    pub async fn add(&self, media: Vec<MediaItem>) {
        self.insert(media, usize::MAX).await;
    }

    /// Remove an item from the queue
    ///
    /// If the removed item was current, the cursor moves to the following
    /// item, else to the previous one, else to nothing. The caller stops
    /// playback if the removed item was playing; the queue only updates
    /// state.
    pub async fn remove(&self, id: &PlaylistItemId) -> Result<()> {
        let mut state = self.state.lock().await;
        let index = state
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| PlaylistError::ItemNotInPlaylist(id.clone()))?;
        let was_current = state.current.as_ref() == Some(id);
        state.items.remove(index);
        if was_current {
            state.current = state
                .items
                .get(index)
                .or_else(|| state.items.last())
                .map(|item| item.id.clone());
        }
        self.commit(&state).await;
        Ok(())
    }

    /// Move an item to a new position
    ///
    /// The target index is clamped. The cursor keeps following the item it
    /// points at.
    pub async fn move_to(&self, id: &PlaylistItemId, to: usize) -> Result<()> {
        let mut state = self.state.lock().await;
        let from = state
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| PlaylistError::ItemNotInPlaylist(id.clone()))?;
        let item = state.items.remove(from);
        let to = to.min(state.items.len());
        state.items.insert(to, item);
        self.commit(&state).await;
        Ok(())
    }

    /// Point the cursor at the given item
    pub async fn set_current(&self, id: &PlaylistItemId) -> Result<()> {
        let mut state = self.state.lock().await;
        if !state.items.iter().any(|item| &item.id == id) {
            return Err(PlaylistError::ItemNotInPlaylist(id.clone()));
        }
        state.current = Some(id.clone());
        self.commit(&state).await;
        Ok(())
    }

    /// Remove everything and clear the cursor
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.items.clear();
        state.current = None;
        self.commit(&state).await;
    }

    /// Move the cursor to the following item
    ///
    /// Returns the new current item, or `None` (and leaves the cursor
    /// alone) when there is no cursor or it already sits on the last item.
    pub async fn advance(&self) -> Option<PlaylistItem> {
        let mut state = self.state.lock().await;
        let index = current_index_of(&state)?;
        let next = state.items.get(index + 1)?.clone();
        state.current = Some(next.id.clone());
        self.commit(&state).await;
        Some(next)
    }

    /// Move the cursor to the preceding item
    ///
    /// Returns the new current item, or `None` (and leaves the cursor
    /// alone) when there is no cursor or it already sits on the first item.
    pub async fn go_back(&self) -> Option<PlaylistItem> {
        let mut state = self.state.lock().await;
        let index = current_index_of(&state)?;
        let previous = state.items.get(index.checked_sub(1)?)?.clone();
        state.current = Some(previous.id.clone());
        self.commit(&state).await;
        Some(previous)
    }

    /// Record that an item finished playing
    pub async fn mark_played(&self, id: &PlaylistItemId) -> Result<()> {
        let mut state = self.state.lock().await;
        let item = state
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| PlaylistError::ItemNotInPlaylist(id.clone()))?;
        item.play_count += 1;
        item.last_played_at = Some(Utc::now());
        self.commit(&state).await;
        Ok(())
    }

    /// Reorder the queue randomly
    ///
    /// With `preserve_current`, the current item is moved to the front so
    /// whatever is playing keeps playing from position zero.
    pub async fn shuffle(&self, preserve_current: bool) {
        let mut state = self.state.lock().await;
        state.items.shuffle(&mut rand::thread_rng());
        if preserve_current {
            if let Some(index) = current_index_of(&state) {
                let item = state.items.remove(index);
                state.items.insert(0, item);
            }
        }
        self.commit(&state).await;
    }

    /// Persist the latest snapshot explicitly
    ///
    /// For app-exit teardown; every mutation already persists on its own.
    pub async fn flush(&self) {
        let snapshot = self.snapshot.borrow().clone();
        self.persist(&snapshot).await;
    }

    /// Publish the mutated state to observers, then persist it
    async fn commit(&self, state: &PlaylistState) {
        debug_assert!(state
            .current
            .as_ref()
            .map_or(true, |id| state.items.iter().any(|item| &item.id == id)));
        let snapshot = PlaylistSnapshot {
            items: state.items.clone().into(),
            current: state.current.clone(),
        };
        self.snapshot.send_replace(snapshot.clone());
        self.persist(&snapshot).await;
    }

    async fn persist(&self, snapshot: &PlaylistSnapshot) {
        if let Err(error) = self.store.set_items(&snapshot.items).await {
            warn!(%error, "failed to persist playlist items");
        }
        if let Err(error) = self
            .store
            .set_current_item_id(snapshot.current.as_ref())
            .await
        {
            warn!(%error, "failed to persist current item");
        }
    }
}

fn current_index_of(state: &PlaylistState) -> Option<usize> {
    let current = state.current.as_ref()?;
    state.items.iter().position(|item| &item.id == current)
}
