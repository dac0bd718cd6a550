//! Store service client

use super::batch::{encode_batch, BatchEntry, BATCH_CONTENT_TYPE};
use super::listing::{KeyListing, KeysPaginator, StoreListing, StoresPaginator};
use super::models::{
    CreateStoreInput, InsertKeyInput, KvStore, ListKeysInput, ListKeysResponse, ListStoresInput,
    ListStoresResponse,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{is_dot_segment, HttpClient, RequestConfig};
use crate::pagination::Paginator;
use bytes::Bytes;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Path of the store collection, relative to the endpoint
const STORES_PATH: [&str; 3] = ["resources", "stores", "kv"];

/// Client for the key-value store service.
///
/// Cloning is cheap; clones share one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct KvStoreClient {
    http: Arc<HttpClient>,
}

impl KvStoreClient {
    /// Wrap an HTTP client whose base URL points at the service
    pub fn new(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Build a client from validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        Ok(Self::new(http))
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========================================================================
    // Stores
    // ========================================================================

    /// Fetch one page of stores
    pub async fn list_stores(&self, input: &ListStoresInput) -> Result<ListStoresResponse> {
        let url = self.url(&[])?;
        let config = RequestConfig::new()
            .query_opt("cursor", non_empty(input.cursor.as_deref()))
            .query_opt("limit", (input.limit > 0).then(|| input.limit.to_string()));
        self.http.get_json_with_config(&url, config).await
    }

    /// Paginator over all stores. Performs no I/O until advanced.
    pub fn list_stores_paginator(&self, mut input: ListStoresInput) -> StoresPaginator {
        let cursor = input.cursor.take();
        Paginator::starting_at(StoreListing::new(self.clone(), input), cursor)
    }

    /// Create a store
    pub async fn create_store(&self, input: &CreateStoreInput) -> Result<KvStore> {
        if input.name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        let url = self.url(&[])?;
        let config = RequestConfig::new()
            .json(json!({ "name": input.name }))
            .query_opt("location", input.location.map(|l| l.as_str()));

        let store: KvStore = self.http.request_json(Method::POST, &url, config).await?;
        debug!("Created store '{}' ({})", store.name, store.store_id);
        Ok(store)
    }

    /// Fetch a store's details
    pub async fn get_store(&self, store_id: &str) -> Result<KvStore> {
        require("store_id", store_id)?;
        let url = self.url(&[store_id])?;
        self.http.get_json(&url).await
    }

    /// Delete a store
    pub async fn delete_store(&self, store_id: &str) -> Result<()> {
        require("store_id", store_id)?;
        let url = self.url(&[store_id])?;
        self.http.delete(&url).await?;
        debug!("Deleted store {store_id}");
        Ok(())
    }

    // ========================================================================
    // Keys
    // ========================================================================

    /// Fetch one page of key names
    pub async fn list_keys(&self, input: &ListKeysInput) -> Result<ListKeysResponse> {
        require("store_id", &input.store_id)?;
        let url = self.url(&[input.store_id.as_str(), "keys"])?;
        let config = RequestConfig::new()
            .query_opt("cursor", non_empty(input.cursor.as_deref()))
            .query_opt("limit", (input.limit > 0).then(|| input.limit.to_string()))
            .query_opt("consistency", input.consistency.map(|c| c.as_str()))
            .query_opt("prefix", non_empty(input.prefix.as_deref()));
        self.http.get_json_with_config(&url, config).await
    }

    /// Paginator over a store's keys. Performs no I/O until advanced;
    /// request validation errors surface on the first advance.
    pub fn list_keys_paginator(&self, mut input: ListKeysInput) -> KeysPaginator {
        let cursor = input.cursor.take();
        Paginator::starting_at(KeyListing::new(self.clone(), input), cursor)
    }

    /// Read a key's value. A missing key yields `None`.
    pub async fn get_key(&self, store_id: &str, key: &str) -> Result<Option<Bytes>> {
        require("store_id", store_id)?;
        require("key", key)?;
        let url = self.url(&[store_id, "keys", key])?;

        match self.http.get(&url).await {
            Ok(response) => Ok(Some(self.http.read_bytes(response).await?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write a single key
    pub async fn insert_key(&self, input: &InsertKeyInput) -> Result<()> {
        require("store_id", &input.store_id)?;
        require("key", &input.key)?;
        let url = self.url(&[input.store_id.as_str(), "keys", input.key.as_str()])?;

        let mut config = RequestConfig::new()
            .raw("application/octet-stream", input.value.clone())
            .header_opt("metadata", input.metadata.as_deref())
            .header_opt(
                "time_to_live_sec",
                input.time_to_live_sec.map(|s| s.to_string()),
            )
            .header_opt(
                "if-generation-match",
                input.if_generation_match.map(|g| g.to_string()),
            );
        if let Some(flag) = input.mode.query_flag() {
            config = config.query(flag, "true");
        }

        self.http.put_with_config(&url, config).await?;
        debug!("Inserted key '{}' into store {}", input.key, input.store_id);
        Ok(())
    }

    /// Delete a key
    pub async fn delete_key(&self, store_id: &str, key: &str) -> Result<()> {
        require("store_id", store_id)?;
        require("key", key)?;
        let url = self.url(&[store_id, "keys", key])?;
        self.http.delete(&url).await?;
        Ok(())
    }

    /// Insert or update many keys from a newline-delimited JSON body
    pub async fn batch_modify(&self, store_id: &str, body: impl Into<Bytes>) -> Result<()> {
        require("store_id", store_id)?;
        let url = self.url(&[store_id, "batch"])?;
        let config = RequestConfig::new().raw(BATCH_CONTENT_TYPE, body);
        self.http.put_with_config(&url, config).await?;
        Ok(())
    }

    /// Insert or update many keys
    pub async fn batch_insert(&self, store_id: &str, entries: &[BatchEntry]) -> Result<()> {
        let body = encode_batch(entries)?;
        self.batch_modify(store_id, body).await?;
        debug!("Batch wrote {} keys into store {store_id}", entries.len());
        Ok(())
    }

    /// Absolute URL of a path below the store collection
    fn url(&self, segments: &[&str]) -> Result<String> {
        let mut path: Vec<&str> = STORES_PATH.to_vec();
        path.extend_from_slice(segments);
        self.http.endpoint(&path)
    }
}

/// Non-empty, and usable as a single URL path segment
fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    if is_dot_segment(value) {
        return Err(Error::invalid_value(
            field,
            format!("'{value}' is not addressable"),
        ));
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
