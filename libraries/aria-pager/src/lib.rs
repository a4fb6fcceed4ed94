//! Aria Pager
//!
//! Concrete pager variants and first-page fetching for Aria.
//!
//! A pager lazily produces an ordered, possibly unbounded sequence of items
//! (see [`aria_core::pager::Pager`]). This crate provides:
//! - [`SimplePager`]: a fixed, already-known in-memory list
//! - [`ErrorPager`]: defensive fallback that only ever fails
//! - [`SubjectPager`]: push-driven snapshots from an external producer
//! - [`DualPager`] / [`WrappedPager`]: two pagers composed into one ordered
//!   sequence, top items first
//! - [`fetch_first_page`]: drain a pager to its first page with a timeout
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::MediaItem;
//! use aria_pager::{fetch_first_page, FetchOptions, SimplePager};
//!
//! # async fn example() -> Result<(), aria_core::PagerError> {
//! let pager = SimplePager::new(vec![
//!     MediaItem::new("Heroes", "David Bowie"),
//!     MediaItem::new("Sound and Vision", "David Bowie"),
//! ]);
//!
//! let first_page = fetch_first_page(&pager, FetchOptions::default()).await?;
//! assert_eq!(first_page.len(), 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channels;
mod compose;
mod dual;
mod error_pager;
mod fetch;
mod simple;
mod subject;
mod wrapped;

// Public exports
pub use dual::DualPager;
pub use error_pager::ErrorPager;
pub use fetch::{fetch_first_page, FetchOptions};
pub use simple::SimplePager;
pub use subject::SubjectPager;
pub use wrapped::WrappedPager;
