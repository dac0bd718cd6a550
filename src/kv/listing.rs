//! Page sources for store and key listings

use super::client::KvStoreClient;
use super::models::{KvStore, ListKeysInput, ListStoresInput};
use crate::error::Result;
use crate::pagination::{Page, PageSource, Paginator};
use async_trait::async_trait;

/// Paginator over the keys of one store
pub type KeysPaginator = Paginator<KeyListing>;

/// Paginator over all stores
pub type StoresPaginator = Paginator<StoreListing>;

/// Key listing of one store, read page by page
#[derive(Debug, Clone)]
pub struct KeyListing {
    client: KvStoreClient,
    input: ListKeysInput,
}

impl KeyListing {
    pub(crate) fn new(client: KvStoreClient, input: ListKeysInput) -> Self {
        Self { client, input }
    }
}

#[async_trait]
impl PageSource for KeyListing {
    type Item = String;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<String>> {
        let mut input = self.input.clone();
        input.cursor = cursor.map(str::to_string);
        let response = self.client.list_keys(&input).await?;
        Ok(Page::new(response.data, response.meta.next_cursor))
    }

    fn describe(&self) -> String {
        format!("keys of store '{}'", self.input.store_id)
    }
}

impl Paginator<KeyListing> {
    /// Key names of the most recently fetched page
    pub fn keys(&self) -> &[String] {
        self.items()
    }
}

/// Store listing, read page by page
#[derive(Debug, Clone)]
pub struct StoreListing {
    client: KvStoreClient,
    input: ListStoresInput,
}

impl StoreListing {
    pub(crate) fn new(client: KvStoreClient, input: ListStoresInput) -> Self {
        Self { client, input }
    }
}

#[async_trait]
impl PageSource for StoreListing {
    type Item = KvStore;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<KvStore>> {
        let mut input = self.input.clone();
        input.cursor = cursor.map(str::to_string);
        let response = self.client.list_stores(&input).await?;
        Ok(Page::new(response.data, response.meta.next_cursor))
    }

    fn describe(&self) -> String {
        "stores".to_string()
    }
}

impl Paginator<StoreListing> {
    /// Stores of the most recently fetched page
    pub fn stores(&self) -> &[KvStore] {
        self.items()
    }
}
