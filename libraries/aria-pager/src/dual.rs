//! Two-pager composite surfacing only main-pager errors

use crate::compose::{ComposeOptions, CompositePager};
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};
use std::sync::Arc;

/// Two pagers composed into one ordered sequence, top items first
///
/// Fetch requests are translated onto the main pager at an index reduced by
/// the top pager's current size (floored at zero), preserving the illusion
/// of one continuous sequence. Only the **main** pager's errors are
/// surfaced: the top half is a decoration over the main history, and a
/// failing decoration should not take the whole sequence down. Use
/// [`WrappedPager`](crate::WrappedPager) when the top half is load-bearing.
///
/// Wiring happens lazily on the first `fetch_at`; a composite that is never
/// queried does no work.
pub struct DualPager<T: PagerItem> {
    inner: CompositePager<T>,
}

impl<T: PagerItem> DualPager<T> {
    /// Compose `top` in front of `main`
    ///
    /// The composite takes exclusive ownership of both pagers and
    /// disconnects them with itself.
    pub fn new(top: Arc<dyn Pager<T>>, main: Arc<dyn Pager<T>>) -> Self {
        Self {
            inner: CompositePager::new(
                top,
                main,
                ComposeOptions {
                    surface_top_errors: false,
                    fetch_top_on_connect: false,
                },
            ),
        }
    }
}

impl<T: PagerItem> Disconnect for DualPager<T> {
    fn disconnect(&self) {
        self.inner.disconnect();
    }
}

impl<T: PagerItem> Pager<T> for DualPager<T> {
    fn observe_items(&self) -> ItemsReceiver<T> {
        self.inner.observe_items()
    }

    fn observe_size(&self) -> SizeReceiver {
        self.inner.observe_size()
    }

    fn observe_error(&self) -> ErrorReceiver {
        self.inner.observe_error()
    }

    fn max_size(&self) -> Option<usize> {
        self.inner.max_size()
    }

    fn fetch_at(&self, index: usize, length: Option<usize>) {
        self.inner.fetch_at(index, length);
    }
}
