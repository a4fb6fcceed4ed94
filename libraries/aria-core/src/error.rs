/// Core error types for Aria
use std::time::Duration;
use thiserror::Error;

/// Result type alias using `AriaError`
pub type Result<T> = std::result::Result<T, AriaError>;

/// Core error type for Aria
#[derive(Error, Debug)]
pub enum AriaError {
    /// Failure reading or writing durable state
    ///
    /// Callers treat this as non-fatal: in-memory state stays authoritative
    /// for the running session.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AriaError {
    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Terminal failure of a pager
///
/// Delivered through [`observe_error`](crate::pager::Pager::observe_error),
/// never thrown out of `fetch_at`. Cloneable so a single stored error can be
/// replayed to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    /// The underlying data source failed to fetch
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// No items or errors arrived within the allowed time
    ///
    /// Raised only by `fetch_first_page`; pagers themselves never time out.
    #[error("Timed out after {0:?} waiting for the first page")]
    Timeout(Duration),

    /// The pager went away before producing anything
    #[error("Pager disconnected before any items arrived")]
    Disconnected,
}

impl PagerError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Whether this error came from the `fetch_first_page` time bound
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_distinguishable_from_fetch_failure() {
        let timeout = PagerError::Timeout(Duration::from_millis(100));
        let fetch = PagerError::fetch("HTTP 503");

        assert!(timeout.is_timeout());
        assert!(!fetch.is_timeout());
    }

    #[test]
    fn error_messages() {
        let err = AriaError::not_found("PlaylistItem", "abc");
        assert_eq!(err.to_string(), "PlaylistItem not found: abc");

        let err = AriaError::persistence("disk full");
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }
}
