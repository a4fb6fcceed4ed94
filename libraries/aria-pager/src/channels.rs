//! Shared channel plumbing for pager implementations

use aria_core::pager::{ErrorReceiver, ItemsReceiver, SizeReceiver};
use aria_core::PagerError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// The sender side of a pager's three observable streams
///
/// Every pager variant owns one of these. All sends go through it so the
/// disconnect flag is checked in one place and the size/items ordering
/// invariant holds for every variant.
pub(crate) struct PagerChannels<T> {
    items: watch::Sender<Option<Arc<[T]>>>,
    size: watch::Sender<usize>,
    error: watch::Sender<Option<PagerError>>,
    disconnected: AtomicBool,
}

impl<T> PagerChannels<T> {
    pub fn new() -> Self {
        Self {
            items: watch::channel(None).0,
            size: watch::channel(0).0,
            error: watch::channel(None).0,
            disconnected: AtomicBool::new(false),
        }
    }

    /// Publish a snapshot whose size is its own length
    pub fn emit(&self, items: Arc<[T]>) {
        self.set_size(items.len());
        self.set_items(items);
    }

    /// Publish a size update
    ///
    /// Must be sent before the item snapshot it refers to, so no subscriber
    /// ever observes a size smaller than the items already delivered.
    pub fn set_size(&self, size: usize) {
        if self.is_disconnected() {
            return;
        }
        self.size.send_if_modified(|current| {
            if *current == size {
                false
            } else {
                *current = size;
                true
            }
        });
    }

    /// Publish an item snapshot
    pub fn set_items(&self, items: Arc<[T]>) {
        if self.is_disconnected() {
            return;
        }
        self.items.send_replace(Some(items));
    }

    /// Record the terminal error; only the first one sticks
    pub fn fail(&self, error: PagerError) {
        if self.is_disconnected() {
            return;
        }
        self.error.send_if_modified(|current| {
            if current.is_some() {
                false
            } else {
                *current = Some(error);
                true
            }
        });
    }

    /// Flip the disconnected flag; returns true on the first call only
    pub fn disconnect(&self) -> bool {
        !self.disconnected.swap(true, Ordering::SeqCst)
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected.load(Ordering::SeqCst)
    }

    /// The latest snapshot, if one was published
    pub fn latest_items(&self) -> Option<Arc<[T]>> {
        self.items.borrow().clone()
    }

    pub fn items(&self) -> ItemsReceiver<T> {
        self.items.subscribe()
    }

    pub fn size(&self) -> SizeReceiver {
        self.size.subscribe()
    }

    pub fn error(&self) -> ErrorReceiver {
        self.error.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_arrives_before_items() {
        let channels: PagerChannels<u32> = PagerChannels::new();
        let size = channels.size();
        let items = channels.items();

        channels.emit(vec![1, 2, 3].into());

        assert_eq!(*size.borrow(), 3);
        assert_eq!(items.borrow().as_deref(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn first_error_wins() {
        let channels: PagerChannels<u32> = PagerChannels::new();
        channels.fail(PagerError::fetch("first"));
        channels.fail(PagerError::fetch("second"));

        assert_eq!(
            *channels.error().borrow(),
            Some(PagerError::fetch("first"))
        );
    }

    #[test]
    fn no_emissions_after_disconnect() {
        let channels: PagerChannels<u32> = PagerChannels::new();
        channels.emit(vec![1].into());

        assert!(channels.disconnect());
        assert!(!channels.disconnect());

        channels.emit(vec![1, 2].into());
        channels.fail(PagerError::fetch("late"));

        assert_eq!(channels.items().borrow().as_deref(), Some(&[1][..]));
        assert_eq!(*channels.size().borrow(), 1);
        assert_eq!(*channels.error().borrow(), None);
    }
}
