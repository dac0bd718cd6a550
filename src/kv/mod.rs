//! Key-value store client
//!
//! Typed operations over the store service REST API:
//!
//! - Stores: list, create, get, delete
//! - Keys: list (single page or paginated), get, insert, delete
//! - Batch: bulk insert/update from newline-delimited JSON
//!
//! All paths live under `/resources/stores/kv` on the configured endpoint.

mod batch;
mod client;
mod listing;
mod models;

pub use batch::{encode_batch, parse_batch, BatchEntry, BATCH_CONTENT_TYPE};
pub use client::KvStoreClient;
pub use listing::{KeyListing, KeysPaginator, StoreListing, StoresPaginator};
pub use models::{
    CreateStoreInput, InsertKeyInput, KvStore, ListKeysInput, ListKeysResponse, ListMeta,
    ListStoresInput, ListStoresResponse,
};
