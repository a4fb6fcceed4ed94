//! Aria Playlist
//!
//! The playback queue for Aria: an ordered sequence of media items with a
//! single current-item cursor, persisted across sessions through a
//! [`aria_core::traits::PlaylistStore`] collaborator.
//!
//! The queue owns no playback machinery. A playback controller observes the
//! cursor through [`Playlist::observe`] and reacts to it; UI code mutates
//! the queue and reads the cursor-derived gates (`at_start`/`at_end`) for
//! its previous/next controls.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_core::types::MediaItem;
//! use aria_playlist::Playlist;
//! use std::sync::Arc;
//!
//! # async fn example(store: Arc<dyn aria_core::traits::PlaylistStore>) {
//! // Restore the previous session's queue and position
//! let playlist = Playlist::load(store).await;
//!
//! playlist.add(vec![MediaItem::new("Roads", "Portishead")]).await;
//!
//! // Drive playback from the cursor
//! if let Some(item) = playlist.current() {
//!     println!("now playing: {}", item.media.title);
//! }
//! playlist.advance().await;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod playlist;

// Public exports
pub use error::{PlaylistError, Result};
pub use playlist::{Playlist, PlaylistSnapshot, SnapshotReceiver};
