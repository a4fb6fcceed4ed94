//! Test fixtures for pager integration tests

use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, SizeReceiver};
use aria_core::types::MediaItem;
use aria_core::PagerError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// A scripted pager driven by hand from tests
///
/// Records every `fetch_at` and `disconnect` call so tests can assert on
/// the translation and teardown behavior of composites and of
/// `fetch_first_page`.
pub struct ProbePager<T> {
    items: watch::Sender<Option<Arc<[T]>>>,
    size: watch::Sender<usize>,
    error: watch::Sender<Option<PagerError>>,
    fetches: Mutex<Vec<(usize, Option<usize>)>>,
    disconnects: AtomicUsize,
}

impl<T> ProbePager<T> {
    pub fn new() -> Self {
        Self {
            items: watch::channel(None).0,
            size: watch::channel(0).0,
            error: watch::channel(None).0,
            fetches: Mutex::new(Vec::new()),
            disconnects: AtomicUsize::new(0),
        }
    }

    /// Emit a snapshot, updating size first like a well-behaved pager
    pub fn emit(&self, items: Vec<T>) {
        self.size.send_replace(items.len());
        self.items.send_replace(Some(items.into()));
    }

    /// Emit a size update on its own (fetch still in flight)
    pub fn set_size(&self, size: usize) {
        self.size.send_replace(size);
    }

    /// Emit a terminal error
    pub fn fail(&self, error: PagerError) {
        self.error.send_replace(Some(error));
    }

    pub fn fetch_calls(&self) -> Vec<(usize, Option<usize>)> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

impl<T> Default for ProbePager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Disconnect for ProbePager<T> {
    fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: Clone + Send + Sync + 'static> Pager<T> for ProbePager<T> {
    fn observe_items(&self) -> ItemsReceiver<T> {
        self.items.subscribe()
    }

    fn observe_size(&self) -> SizeReceiver {
        self.size.subscribe()
    }

    fn observe_error(&self) -> ErrorReceiver {
        self.error.subscribe()
    }

    fn fetch_at(&self, index: usize, length: Option<usize>) {
        self.fetches.lock().unwrap().push((index, length));
    }
}

/// Shorthand for a media item whose title doubles as its test identity
pub fn track(title: &str) -> MediaItem {
    MediaItem::new(title, "Test Artist")
}

/// Titles of a snapshot, for order assertions
pub fn titles(items: &[MediaItem]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}

/// Poll until `condition` holds or a short deadline passes
pub async fn eventually(condition: impl Fn() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("condition not reached within deadline");
}
