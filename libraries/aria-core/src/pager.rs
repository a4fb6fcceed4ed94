//! Incremental pagination contract
//!
//! A [`Pager`] lazily produces an ordered, possibly unbounded sequence of
//! items, fetched on demand and observed through watch channels. Concrete
//! pagers (fixed lists, push-driven feeds, composites, service-backed
//! fetchers) all satisfy the same trait, so arbitrary combinations compose
//! without a shared base type.

use crate::error::PagerError;
use std::sync::Arc;
use tokio::sync::watch;

/// Receiver for item snapshots
///
/// Holds `None` until the pager produces its first snapshot. Every `Some`
/// emission is a complete replacement of the previous snapshot, never a
/// delta, so late subscribers always start from the latest full state.
pub type ItemsReceiver<T> = watch::Receiver<Option<Arc<[T]>>>;

/// Receiver for the accumulated item count
pub type SizeReceiver = watch::Receiver<usize>;

/// Receiver for the pager's terminal error
///
/// Holds `None` until the pager fails; a pager fails at most once.
pub type ErrorReceiver = watch::Receiver<Option<PagerError>>;

/// Release the resources behind a pager
///
/// Split out of [`Pager`] so composite items can hand back a type-erased
/// disposal handle for whatever pager they own (see [`PagerItem`]).
pub trait Disconnect: Send + Sync {
    /// Irreversibly tear down the pager
    ///
    /// Releases subscriptions and propagates to any wrapped pagers. After
    /// this returns, registered subscribers see no further item or size
    /// updates. Calling it again is a no-op.
    fn disconnect(&self);
}

/// An incrementally fetched, observable, cancellable sequence of items
///
/// Restartable only by constructing a new instance. Fetch failures are
/// routed through [`observe_error`](Pager::observe_error), never thrown out
/// of [`fetch_at`](Pager::fetch_at).
pub trait Pager<T>: Disconnect {
    /// Observe snapshots of the items accumulated so far
    ///
    /// The stream never completes while the pager is connected; consumers
    /// must tolerate repeated emissions with overlapping prefixes.
    fn observe_items(&self) -> ItemsReceiver<T>;

    /// Observe the current accumulated item count
    ///
    /// A size emission never refers to a smaller set than the latest item
    /// snapshot already delivered to the same subscriber.
    fn observe_size(&self) -> SizeReceiver;

    /// Observe the pager's terminal error, if it ever fails
    fn observe_error(&self) -> ErrorReceiver;

    /// Total number of items, when the underlying source knows it
    fn max_size(&self) -> Option<usize> {
        None
    }

    /// Request that items in `[index, index + length)` be fetched
    ///
    /// Non-blocking; results arrive through the item stream. Overlapping
    /// requests are idempotent in effect. On a disconnected pager the call
    /// is ignored.
    fn fetch_at(&self, index: usize, length: Option<usize>);
}

/// Items that may own a nested pager
///
/// Some composite items carry their own pager (an album item carrying its
/// track pager). Snapshot-holding pagers use this hook to best-effort
/// disconnect nested pagers when they are themselves disconnected.
pub trait PagerItem: Clone + Send + Sync + 'static {
    /// The nested pager owned by this item, if any
    fn nested_pager(&self) -> Option<&dyn Disconnect> {
        None
    }
}

impl PagerItem for crate::types::MediaItem {}
