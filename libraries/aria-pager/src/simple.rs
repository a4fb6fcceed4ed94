//! Pager over a fixed in-memory list

use crate::channels::PagerChannels;
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};

/// A pager wrapping a list that is already fully known
///
/// The snapshot is available to subscribers immediately and the total size
/// is known up front. Used for search results that arrive in one response,
/// drag-and-drop payloads, and fixed browsing sections.
pub struct SimplePager<T: PagerItem> {
    channels: PagerChannels<T>,
    total: usize,
}

impl<T: PagerItem> SimplePager<T> {
    /// Create a pager over a fixed list of items
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        let channels = PagerChannels::new();
        channels.emit(items.into());
        Self { channels, total }
    }
}

impl<T: PagerItem> Default for SimplePager<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: PagerItem> Disconnect for SimplePager<T> {
    fn disconnect(&self) {
        if !self.channels.disconnect() {
            return;
        }
        if let Some(items) = self.channels.latest_items() {
            for item in items.iter() {
                if let Some(nested) = item.nested_pager() {
                    nested.disconnect();
                }
            }
        }
    }
}

impl<T: PagerItem> Pager<T> for SimplePager<T> {
    fn observe_items(&self) -> ItemsReceiver<T> {
        self.channels.items()
    }

    fn observe_size(&self) -> SizeReceiver {
        self.channels.size()
    }

    fn observe_error(&self) -> ErrorReceiver {
        self.channels.error()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.total)
    }

    fn fetch_at(&self, _index: usize, _length: Option<usize>) {
        // everything is already in the snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::types::MediaItem;

    #[test]
    fn snapshot_is_available_immediately() {
        let pager = SimplePager::new(vec![
            MediaItem::new("One", "A"),
            MediaItem::new("Two", "B"),
        ]);

        let items = pager.observe_items();
        let snapshot = items.borrow();
        let snapshot = snapshot.as_deref().unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "One");
        assert_eq!(*pager.observe_size().borrow(), 2);
        assert_eq!(pager.max_size(), Some(2));
    }

    #[test]
    fn fetch_at_changes_nothing() {
        let pager = SimplePager::new(vec![MediaItem::new("Only", "A")]);
        pager.fetch_at(10, Some(50));

        assert_eq!(*pager.observe_size().borrow(), 1);
    }

    #[test]
    fn empty_pager_emits_empty_snapshot() {
        let pager: SimplePager<MediaItem> = SimplePager::default();
        assert_eq!(pager.observe_items().borrow().as_deref(), Some(&[][..]));
        assert_eq!(pager.max_size(), Some(0));
    }
}
