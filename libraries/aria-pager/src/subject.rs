//! Externally fed pager

use crate::channels::PagerChannels;
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};

/// A pager fed by an external producer
///
/// Backs live feeds such as recently-played lists: the producer pushes a
/// full snapshot with [`next`](SubjectPager::next) whenever its source
/// changes, and subscribers see each push as a complete replacement of the
/// previous snapshot, never a delta.
pub struct SubjectPager<T: PagerItem> {
    channels: PagerChannels<T>,
}

impl<T: PagerItem> SubjectPager<T> {
    /// Create an empty pager awaiting its first push
    pub fn new() -> Self {
        Self {
            channels: PagerChannels::new(),
        }
    }

    /// Replace the full snapshot and broadcast it to subscribers
    ///
    /// Ignored after `disconnect()`.
    pub fn next(&self, items: Vec<T>) {
        self.channels.emit(items.into());
    }
}

impl<T: PagerItem> Default for SubjectPager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PagerItem> Disconnect for SubjectPager<T> {
    fn disconnect(&self) {
        if !self.channels.disconnect() {
            return;
        }
        // Pushed items may own pagers of their own (an album carrying its
        // track pager); dispose them with the snapshot they arrived in.
        if let Some(items) = self.channels.latest_items() {
            for item in items.iter() {
                if let Some(nested) = item.nested_pager() {
                    nested.disconnect();
                }
            }
        }
    }
}

impl<T: PagerItem> Pager<T> for SubjectPager<T> {
    fn observe_items(&self) -> ItemsReceiver<T> {
        self.channels.items()
    }

    fn observe_size(&self) -> SizeReceiver {
        self.channels.size()
    }

    fn observe_error(&self) -> ErrorReceiver {
        self.channels.error()
    }

    fn fetch_at(&self, _index: usize, _length: Option<usize>) {
        // push-driven; there is nothing to fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::types::MediaItem;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn push_replaces_the_whole_snapshot() {
        let pager = SubjectPager::new();
        pager.next(vec![
            MediaItem::new("a", "x"),
            MediaItem::new("b", "x"),
            MediaItem::new("c", "x"),
        ]);

        let items = pager.observe_items();
        assert_eq!(items.borrow().as_deref().map(<[MediaItem]>::len), Some(3));

        pager.next(vec![MediaItem::new("d", "x")]);

        let snapshot = items.borrow();
        let snapshot = snapshot.as_deref().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "d");
        assert_eq!(*pager.observe_size().borrow(), 1);
    }

    #[test]
    fn push_after_disconnect_is_ignored() {
        let pager = SubjectPager::new();
        pager.next(vec![MediaItem::new("a", "x")]);
        pager.disconnect();
        pager.next(vec![MediaItem::new("b", "x"), MediaItem::new("c", "x")]);

        assert_eq!(
            pager.observe_items().borrow().as_deref().map(<[MediaItem]>::len),
            Some(1)
        );
    }

    struct NestedProbe {
        disconnects: AtomicUsize,
    }

    impl Disconnect for NestedProbe {
        fn disconnect(&self) {
            self.disconnects.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Clone)]
    struct Album {
        tracks: Arc<NestedProbe>,
    }

    impl PagerItem for Album {
        fn nested_pager(&self) -> Option<&dyn Disconnect> {
            Some(self.tracks.as_ref())
        }
    }

    #[test]
    fn disconnect_disposes_nested_pagers() {
        let tracks = Arc::new(NestedProbe {
            disconnects: AtomicUsize::new(0),
        });
        let pager = SubjectPager::new();
        pager.next(vec![Album {
            tracks: Arc::clone(&tracks),
        }]);

        pager.disconnect();
        assert_eq!(tracks.disconnects.load(Ordering::SeqCst), 1);

        // second disconnect is a no-op
        pager.disconnect();
        assert_eq!(tracks.disconnects.load(Ordering::SeqCst), 1);
    }
}
