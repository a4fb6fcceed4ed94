//! Aria Core
//!
//! Foundation types, the pager contract, and collaborator traits for Aria's
//! pagination and playlist subsystem.
//!
//! This crate defines:
//! - **Domain Types**: [`MediaItem`], [`PlaylistItem`], ID newtypes
//! - **The Pager Contract**: [`pager::Pager`] and its channel aliases
//! - **Collaborator Traits**: [`PlaylistStore`], [`MediaProvider`]
//! - **Error Handling**: unified [`AriaError`], cloneable [`PagerError`]
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{MediaItem, PlaylistItem, SearchParams};
//!
//! let media = MediaItem::new("Marquee Moon", "Television");
//! let queued = PlaylistItem::new(media);
//! let params = SearchParams::new("television");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod pager;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{AriaError, PagerError, Result};
pub use pager::{Disconnect, ErrorReceiver, ItemsReceiver, Pager, PagerItem, SizeReceiver};
pub use traits::{MediaProvider, PlaylistStore};
pub use types::{
    MediaItem, MediaItemId, MediaKind, MediaSource, PlaylistItem, PlaylistItemId, SearchParams,
};
