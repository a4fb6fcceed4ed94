//! Shared engine for two-pager composition

use crate::channels::PagerChannels;
use aria_core::pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

/// The most recent fetch request issued against a composite
///
/// Kept around so the translation against the main pager can be re-issued
/// whenever the top pager's size moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FetchRequest {
    index: usize,
    length: Option<usize>,
}

/// Behavioral knobs distinguishing the public composite variants
pub(crate) struct ComposeOptions {
    /// Forward the top pager's terminal errors as well as the main pager's
    pub surface_top_errors: bool,
    /// Issue `top.fetch_at(0)` when the composite first connects
    pub fetch_top_on_connect: bool,
}

/// Two pagers presented as one continuous sequence, top items first
///
/// Wiring is lazy: nothing is subscribed until the first `fetch_at` call
/// spawns the forwarder task. The composite exclusively owns both wrapped
/// pagers and disconnects them with itself.
pub(crate) struct CompositePager<T: PagerItem> {
    top: Arc<dyn Pager<T>>,
    main: Arc<dyn Pager<T>>,
    channels: Arc<PagerChannels<T>>,
    requests: watch::Sender<Option<FetchRequest>>,
    forwarder: Mutex<Option<JoinHandle<()>>>,
    options: ComposeOptions,
}

impl<T: PagerItem> CompositePager<T> {
    pub fn new(
        top: Arc<dyn Pager<T>>,
        main: Arc<dyn Pager<T>>,
        options: ComposeOptions,
    ) -> Self {
        Self {
            top,
            main,
            channels: Arc::new(PagerChannels::new()),
            requests: watch::channel(None).0,
            forwarder: Mutex::new(None),
            options,
        }
    }

    pub fn observe_items(&self) -> ItemsReceiver<T> {
        self.channels.items()
    }

    pub fn observe_size(&self) -> SizeReceiver {
        self.channels.size()
    }

    pub fn observe_error(&self) -> ErrorReceiver {
        self.channels.error()
    }

    pub fn max_size(&self) -> Option<usize> {
        match (self.top.max_size(), self.main.max_size()) {
            (Some(top), Some(main)) => Some(top + main),
            _ => None,
        }
    }

    pub fn fetch_at(&self, index: usize, length: Option<usize>) {
        if self.channels.is_disconnected() {
            warn!(index, "fetch_at on a disconnected pager ignored");
            return;
        }
        self.requests.send_replace(Some(FetchRequest { index, length }));
        self.connect();
    }

    /// Spawn the forwarder on first use; later calls are no-ops
    fn connect(&self) {
        let mut forwarder = match self.forwarder.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if forwarder.is_some() || self.channels.is_disconnected() {
            return;
        }
        if self.options.fetch_top_on_connect {
            self.top.fetch_at(0, None);
        }
        *forwarder = Some(tokio::spawn(forward(
            Arc::clone(&self.top),
            Arc::clone(&self.main),
            Arc::clone(&self.channels),
            self.requests.subscribe(),
            self.options.surface_top_errors,
        )));
    }

    pub fn disconnect(&self) {
        if !self.channels.disconnect() {
            return;
        }
        let handle = match self.forwarder.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
        }
        self.top.disconnect();
        self.main.disconnect();
    }
}

/// Drive the composite's outputs from its sub-pagers' streams
///
/// Wakes on any sub-pager change or new fetch request, then re-derives the
/// combined size (live sum), the combined snapshot (top items then main
/// items, once both sides have emitted), the surfaced error, and the
/// translated fetch against the main pager.
async fn forward<T: PagerItem>(
    top: Arc<dyn Pager<T>>,
    main: Arc<dyn Pager<T>>,
    channels: Arc<PagerChannels<T>>,
    mut requests: watch::Receiver<Option<FetchRequest>>,
    surface_top_errors: bool,
) {
    let mut top_items = top.observe_items();
    let mut top_size = top.observe_size();
    let mut top_errors = top.observe_error();
    let mut main_items = main.observe_items();
    let mut main_size = main.observe_size();
    let mut main_errors = main.observe_error();

    let mut requests_open = true;
    let mut top_items_open = true;
    let mut top_size_open = true;
    let mut top_errors_open = surface_top_errors;
    let mut main_items_open = true;
    let mut main_size_open = true;
    let mut main_errors_open = true;

    let mut dispatched: Option<(usize, FetchRequest)> = None;

    loop {
        if channels.is_disconnected() {
            break;
        }

        let top_len = *top_size.borrow();
        let main_len = *main_size.borrow();
        channels.set_size(top_len + main_len);

        let top_snapshot = top_items.borrow().clone();
        let main_snapshot = main_items.borrow().clone();
        if let (Some(top_part), Some(main_part)) = (top_snapshot, main_snapshot) {
            let combined: Arc<[T]> = top_part
                .iter()
                .cloned()
                .chain(main_part.iter().cloned())
                .collect();
            channels.set_items(combined);
        }

        if let Some(error) = main_errors.borrow().clone() {
            channels.fail(error);
        }
        if surface_top_errors {
            if let Some(error) = top_errors.borrow().clone() {
                channels.fail(error);
            }
        }

        // Translate the recorded request against the current top size. The
        // subtraction floors at zero: a request inside the top range still
        // prefetches the head of the main sequence.
        if let Some(request) = *requests.borrow() {
            if dispatched != Some((top_len, request)) {
                dispatched = Some((top_len, request));
                main.fetch_at(request.index.saturating_sub(top_len), request.length);
            }
        }

        tokio::select! {
            changed = requests.changed(), if requests_open => requests_open = changed.is_ok(),
            changed = top_items.changed(), if top_items_open => top_items_open = changed.is_ok(),
            changed = top_size.changed(), if top_size_open => top_size_open = changed.is_ok(),
            changed = top_errors.changed(), if top_errors_open => top_errors_open = changed.is_ok(),
            changed = main_items.changed(), if main_items_open => main_items_open = changed.is_ok(),
            changed = main_size.changed(), if main_size_open => main_size_open = changed.is_ok(),
            changed = main_errors.changed(), if main_errors_open => main_errors_open = changed.is_ok(),
            else => break,
        }
    }
}
