//! Pager that only ever fails

use crate::channels::PagerChannels;
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};
use aria_core::PagerError;

/// A pager that never produces items and reports a stored error
///
/// Defensive fallback for code paths that must hand back *some* pager: a
/// service that is not logged in, an unsupported item kind, a lookup that
/// failed before paging could start. The item and size streams stay pending
/// forever; the stored error is delivered to any subscriber.
pub struct ErrorPager<T: PagerItem> {
    channels: PagerChannels<T>,
}

impl<T: PagerItem> ErrorPager<T> {
    /// Create a pager that reports the given error
    pub fn new(error: PagerError) -> Self {
        let channels = PagerChannels::new();
        channels.fail(error);
        Self { channels }
    }
}

impl<T: PagerItem> Disconnect for ErrorPager<T> {
    fn disconnect(&self) {
        self.channels.disconnect();
    }
}

impl<T: PagerItem> Pager<T> for ErrorPager<T> {
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
        // there is nothing to fetch
    }
}
