//! Two-pager composite for prepending a live feed

use crate::compose::{ComposeOptions, CompositePager};
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};
use std::sync::Arc;

/// A live top pager prepended to a historical main pager
///
/// The canonical use is a recently-played feed (a
/// [`SubjectPager`](crate::SubjectPager)) in front of a service-backed
/// history pager. Unlike [`DualPager`](crate::DualPager), the top half here
/// is part of the content, so **both** pagers' error streams are merged:
/// whichever fails first becomes the composite's terminal error. Connecting
/// also kicks the top pager with `fetch_at(0)` so a fetch-driven top starts
/// producing without a separate call.
pub struct WrappedPager<T: PagerItem> {
    inner: CompositePager<T>,
}

impl<T: PagerItem> WrappedPager<T> {
    /// Prepend `top` in front of `main`
    ///
    /// The composite takes exclusive ownership of both pagers and
    /// disconnects them with itself.
    pub fn new(top: Arc<dyn Pager<T>>, main: Arc<dyn Pager<T>>) -> Self {
        Self {
            inner: CompositePager::new(
                top,
                main,
                ComposeOptions {
                    surface_top_errors: true,
                    fetch_top_on_connect: true,
                },
            ),
        }
    }
}

impl<T: PagerItem> Disconnect for WrappedPager<T> {
    fn disconnect(&self) {
        self.inner.disconnect();
    }
}

impl<T: PagerItem> Pager<T> for WrappedPager<T> {
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
