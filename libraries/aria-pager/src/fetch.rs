//! One-shot bridge from lazy pagers to awaited results

use aria_core::pager::{Disconnect, Pager};
use aria_core::PagerError;
use std::time::Duration;

/// Options for [`fetch_first_page`]
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Upper bound on waiting for the first snapshot (default: 5000 ms)
    pub timeout: Duration,

    /// Leave the pager connected after the result resolves (default: false)
    pub keep_alive: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            keep_alive: false,
        }
    }
}

/// Drain a pager down to its first page
///
/// Issues `fetch_at(0)` and resolves with the first item snapshot, or fails
/// with the pager's error or a [`PagerError::Timeout`], whichever happens
/// first. Exactly one of the competing streams settles the result; the
/// loser is dropped immediately.
///
/// Unless `keep_alive` is set, the pager is disconnected once the race
/// resolves, success or failure, so one-shot callers cannot leak
/// subscriptions.
pub async fn fetch_first_page<T: Clone>(
    pager: &dyn Pager<T>,
    options: FetchOptions,
) -> Result<Vec<T>, PagerError> {
    let mut items = pager.observe_items();
    let mut errors = pager.observe_error();
    pager.fetch_at(0, None);

    let first_page = async {
        tokio::select! {
            snapshot = items.wait_for(|snapshot| snapshot.is_some()) => match snapshot {
                Ok(snapshot) => Ok(snapshot.as_deref().map(<[T]>::to_vec).unwrap_or_default()),
                Err(_) => Err(PagerError::Disconnected),
            },
            error = errors.wait_for(|error| error.is_some()) => match error {
                Ok(error) => Err(error.as_ref().cloned().unwrap_or(PagerError::Disconnected)),
                Err(_) => Err(PagerError::Disconnected),
            },
        }
    };

    let result = match tokio::time::timeout(options.timeout, first_page).await {
        Ok(result) => result,
        Err(_) => Err(PagerError::Timeout(options.timeout)),
    };

    if !options.keep_alive {
        pager.disconnect();
    }

    result
}
