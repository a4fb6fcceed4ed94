//! Aria Storage
//!
//! SQLite-backed persistence for Aria's playlist state.
//!
//! One table holds one row: the queued sequence as a JSON document plus the
//! current-item cursor, so a reload restores the exact playback position.
//! The [`Database`] implements [`aria_core::traits::PlaylistStore`]; the
//! playlist itself treats storage failures as non-fatal.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_storage::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let database = Database::new("sqlite://aria.db").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod database;
mod error;

pub use database::Database;
pub use error::{Result, StorageError};
