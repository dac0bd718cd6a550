//! Pagination module
//!
//! Cursor-based pagination over service listings.
//!
//! # Overview
//!
//! A [`Paginator`] pulls one page per [`Paginator::advance`] call from a
//! [`PageSource`] and keeps the continuation cursor itself. Errors are never
//! returned from `advance`: they end the iteration and are recorded for the
//! caller to inspect once the loop is done.
//!
//! ```rust,ignore
//! let mut pages = client.list_keys_paginator(ListKeysInput::new(store_id).limit(100));
//! while pages.advance().await {
//!     for key in pages.keys() {
//!         println!("{key}");
//!     }
//! }
//! if let Some(err) = pages.err() {
//!     // iteration stopped early
//! }
//! ```

mod paginator;
mod types;

pub use paginator::{PageSource, Paginator};
pub use types::{Page, PaginationState, Phase};
