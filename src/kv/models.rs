//! Request inputs and response payloads for the store service

use crate::types::{Consistency, InsertMode, StoreId, StoreLocation};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Responses
// ============================================================================

/// A key-value store as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvStore {
    /// Opaque identifier assigned at creation
    #[serde(rename = "id")]
    pub store_id: StoreId,
    /// Human-assigned name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Listing metadata shared by store and key listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Cursor for the next page; absent or empty on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Page size the service applied
    #[serde(default)]
    pub limit: Option<u32>,
    /// Prefix filter the service applied
    #[serde(default)]
    pub prefix: Option<String>,
    /// Consistency the service applied
    #[serde(default)]
    pub consistency: Option<String>,
}

/// One page of stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStoresResponse {
    #[serde(default)]
    pub data: Vec<KvStore>,
    #[serde(default)]
    pub meta: ListMeta,
}

/// One page of key names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListKeysResponse {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub meta: ListMeta,
}

// ============================================================================
// Inputs
// ============================================================================

/// Input for creating a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStoreInput {
    /// Store name (required)
    pub name: String,
    /// Where the store's primary data should live
    pub location: Option<StoreLocation>,
}

impl CreateStoreInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    #[must_use]
    pub fn location(mut self, location: StoreLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Input for listing stores
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStoresInput {
    /// Continuation cursor from a previous page
    pub cursor: Option<String>,
    /// Page size, 0 for the service default
    pub limit: u32,
}

impl ListStoresInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Input for listing the keys of a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKeysInput {
    /// Store to list (required)
    pub store_id: StoreId,
    /// Read consistency, service default when unset
    pub consistency: Option<Consistency>,
    /// Page size, 0 for the service default
    pub limit: u32,
    /// Continuation cursor from a previous page
    pub cursor: Option<String>,
    /// Only list keys starting with this prefix
    pub prefix: Option<String>,
}

impl ListKeysInput {
    pub fn new(store_id: impl Into<StoreId>) -> Self {
        Self {
            store_id: store_id.into(),
            consistency: None,
            limit: 0,
            cursor: None,
            prefix: None,
        }
    }

    #[must_use]
    pub fn consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = Some(consistency);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Input for writing a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertKeyInput {
    pub store_id: StoreId,
    pub key: String,
    pub value: Bytes,
    /// Free-form metadata stored alongside the value
    pub metadata: Option<String>,
    /// Seconds until the service expires the key
    pub time_to_live_sec: Option<u64>,
    /// Only write if the current generation matches
    pub if_generation_match: Option<u64>,
    pub mode: InsertMode,
}

impl InsertKeyInput {
    pub fn new(
        store_id: impl Into<StoreId>,
        key: impl Into<String>,
        value: impl Into<Bytes>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            key: key.into(),
            value: value.into(),
            metadata: None,
            time_to_live_sec: None,
            if_generation_match: None,
            mode: InsertMode::default(),
        }
    }

    #[must_use]
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    #[must_use]
    pub fn time_to_live_sec(mut self, seconds: u64) -> Self {
        self.time_to_live_sec = Some(seconds);
        self
    }

    #[must_use]
    pub fn if_generation_match(mut self, generation: u64) -> Self {
        self.if_generation_match = Some(generation);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: InsertMode) -> Self {
        self.mode = mode;
        self
    }
}
