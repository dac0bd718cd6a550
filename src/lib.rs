//! # KV Store Client
//!
//! An async client for a hosted key-value store service, with a small CLI
//! on top.
//!
//! ## Features
//!
//! - **Store Management**: List, create, inspect and delete stores
//! - **Key Operations**: Read, write (overwrite/add/append/prepend) and delete keys
//! - **Batch Writes**: Upload many keys at once as newline-delimited JSON
//! - **Key Pagination**: Iterate every key of a store page by page with
//!   deferred error reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kvstore_client::{ClientConfig, KvStoreClient, ListKeysInput, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = KvStoreClient::from_config(&config)?;
//!
//!     let mut pages = client.list_keys_paginator(ListKeysInput::new("my-store-id").limit(100));
//!     while pages.advance().await {
//!         for key in pages.keys() {
//!             println!("{key}");
//!         }
//!     }
//!     pages.finish()
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         KvStoreClient                           │
//! │  stores: list/create/get/delete   keys: list/get/insert/delete  │
//! │  batch_modify    list_keys_paginator → Paginator<KeyListing>    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────┬──────────────────────────┐
//! │     Auth     │         HTTP          │        Pagination        │
//! ├──────────────┼───────────────────────┼──────────────────────────┤
//! │ Fastly-Key   │ Status mapping        │ PageSource trait         │
//! │ (or none)    │ Rate limit (optional) │ Fresh/HasMore/Terminal/  │
//! │              │ Path encoding         │ Failed phases            │
//! └──────────────┴───────────────────────┴──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::new_without_default)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP transport with optional rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Store and key operations
pub mod kv;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ClientConfig;
pub use kv::{
    BatchEntry, CreateStoreInput, InsertKeyInput, KeysPaginator, KvStore, KvStoreClient,
    ListKeysInput, ListStoresInput, StoresPaginator,
};
pub use pagination::{Page, PageSource, Paginator, Phase};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
