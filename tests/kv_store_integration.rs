//! Integration tests against an in-memory store service
//!
//! Tests the full flow: create store → insert keys → batch → paginated listing → cleanup

mod common;

use common::{client_for, FakeKvService, DEFAULT_PAGE_SIZE};
use kvstore_client::kv::{encode_batch, ListStoresInput};
use kvstore_client::{
    BatchEntry, Consistency, CreateStoreInput, Error, InsertKeyInput, InsertMode, KvStoreClient,
    ListKeysInput, Phase, StoreLocation,
};
use pretty_assertions::assert_eq;

async fn all_keys(client: &KvStoreClient, input: ListKeysInput) -> (Vec<String>, Vec<usize>) {
    let mut pages = client.list_keys_paginator(input);
    let mut keys = Vec::new();
    let mut sizes = Vec::new();
    while pages.advance().await {
        sizes.push(pages.keys().len());
        keys.extend_from_slice(pages.keys());
    }
    assert!(pages.err().is_none(), "unexpected error: {:?}", pages.err());
    assert_eq!(pages.phase(), Phase::Terminal);
    keys.sort();
    (keys, sizes)
}

async fn seed(client: &KvStoreClient, store_id: &str, keys: &[&str]) {
    for (i, key) in keys.iter().enumerate() {
        let input = InsertKeyInput::new(store_id, *key, format!("{key}{i}"));
        client.insert_key(&input).await.unwrap();
    }
}

// ============================================================================
// End-to-end flow
// ============================================================================

#[tokio::test]
async fn test_store_lifecycle() {
    let (server, service) = FakeKvService::start().await;
    let client = client_for(&server);

    let store = client
        .create_store(&CreateStoreInput::new("kv-store-test-store"))
        .await
        .unwrap();
    assert_eq!(store.name, "kv-store-test-store");
    assert!(store.created_at.is_some());

    let listed = client.list_stores(&ListStoresInput::new()).await.unwrap();
    assert!(listed.data.iter().any(|s| s.store_id == store.store_id));

    let fetched = client.get_store(&store.store_id).await.unwrap();
    assert_eq!(fetched, store);

    // Individual inserts
    seed(&client, &store.store_id, &["apple", "banana", "carrot"]).await;
    assert_eq!(
        client
            .get_key(&store.store_id, "banana")
            .await
            .unwrap()
            .as_deref(),
        Some(&b"banana1"[..])
    );

    // Batch inserts, one line indented
    let body = format!(
        "{}    {}",
        encode_batch(&[BatchEntry::new("batch-1", "VALUE")]).unwrap(),
        encode_batch(&[BatchEntry::new("batch-2", "VALUE")]).unwrap()
    );
    client.batch_modify(&store.store_id, body).await.unwrap();
    assert_eq!(
        client
            .get_key(&store.store_id, "batch-2")
            .await
            .unwrap()
            .as_deref(),
        Some(&b"VALUE"[..])
    );

    let (keys, _) = all_keys(
        &client,
        ListKeysInput::new(&store.store_id).consistency(Consistency::Strong),
    )
    .await;
    assert_eq!(keys, vec!["apple", "banana", "batch-1", "batch-2", "carrot"]);

    // Cleanup
    assert!(matches!(
        client.delete_store(&store.store_id).await,
        Err(Error::HttpStatus { status: 409, .. })
    ));
    for key in &keys {
        client.delete_key(&store.store_id, key).await.unwrap();
    }
    assert!(client
        .get_key(&store.store_id, "apple")
        .await
        .unwrap()
        .is_none());
    client.delete_store(&store.store_id).await.unwrap();
    assert!(client
        .get_store(&store.store_id)
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(service.store_count(), 0);
}

#[tokio::test]
async fn test_create_store_in_each_location() {
    let (server, service) = FakeKvService::start().await;
    let client = client_for(&server);

    for location in StoreLocation::ALL {
        let input = CreateStoreInput::new(format!("store-{location}")).location(location);
        let store = client.create_store(&input).await.unwrap();
        assert_eq!(store.name, format!("store-{location}"));
    }
    assert_eq!(service.store_count(), 4);

    let mut pages = client.list_stores_paginator(ListStoresInput::new().limit(3));
    let mut names = Vec::new();
    while pages.advance().await {
        names.extend(pages.stores().iter().map(|s| s.name.clone()));
    }
    pages.finish().unwrap();
    assert_eq!(
        names,
        vec!["store-US", "store-EU", "store-ASIA", "store-AUS"]
    );
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_paginate_seven_keys_by_four() {
    let (server, service) = FakeKvService::start().await;
    let client = client_for(&server);
    let store = client
        .create_store(&CreateStoreInput::new("paging"))
        .await
        .unwrap();

    let names = [
        "apple", "banana", "carrot", "dragonfruit", "eggplant", "fig", "grape",
    ];
    seed(&client, &store.store_id, &names).await;

    let (keys, sizes) = all_keys(&client, ListKeysInput::new(&store.store_id).limit(4)).await;
    assert_eq!(sizes, vec![4, 3]);
    assert_eq!(keys, names.to_vec());
    assert_eq!(service.list_key_calls(), 2);
}

#[tokio::test]
async fn test_default_limit_terminates() {
    let (server, service) = FakeKvService::start().await;
    let client = client_for(&server);
    let store = client
        .create_store(&CreateStoreInput::new("defaults"))
        .await
        .unwrap();

    let entries: Vec<BatchEntry> = (0..DEFAULT_PAGE_SIZE + 5)
        .map(|i| BatchEntry::new(format!("key-{i:04}"), "v"))
        .collect();
    client
        .batch_insert(&store.store_id, &entries)
        .await
        .unwrap();

    let (keys, sizes) = all_keys(&client, ListKeysInput::new(&store.store_id)).await;
    assert_eq!(keys.len(), DEFAULT_PAGE_SIZE + 5);
    assert_eq!(sizes, vec![DEFAULT_PAGE_SIZE, 5]);
    assert_eq!(service.list_key_calls(), 2);
}

#[tokio::test]
async fn test_empty_store_single_terminal_page() {
    let (server, _service) = FakeKvService::start().await;
    let client = client_for(&server);
    let store = client
        .create_store(&CreateStoreInput::new("empty"))
        .await
        .unwrap();

    let mut pages = client.list_keys_paginator(ListKeysInput::new(&store.store_id));
    assert!(pages.advance().await);
    assert!(pages.keys().is_empty());
    assert_eq!(pages.phase(), Phase::Terminal);
    assert!(!pages.advance().await);
    assert!(pages.err().is_none());
}

#[tokio::test]
async fn test_prefix_listing() {
    let (server, _service) = FakeKvService::start().await;
    let client = client_for(&server);
    let store = client
        .create_store(&CreateStoreInput::new("prefixed"))
        .await
        .unwrap();
    seed(&client, &store.store_id, &["a-1", "a-2", "b-1", "a-3"]).await;

    let (keys, sizes) = all_keys(
        &client,
        ListKeysInput::new(&store.store_id).prefix("a-").limit(2),
    )
    .await;
    assert_eq!(keys, vec!["a-1", "a-2", "a-3"]);
    assert_eq!(sizes, vec![2, 1]);
}

#[tokio::test]
async fn test_missing_store_fails_listing() {
    let (server, service) = FakeKvService::start().await;
    let client = client_for(&server);

    let mut pages = client.list_keys_paginator(ListKeysInput::new("st_missing"));
    assert!(!pages.advance().await);
    assert!(!pages.advance().await);
    assert_eq!(pages.phase(), Phase::Failed);
    assert!(pages.err().is_some_and(Error::is_not_found));
    assert!(pages.err().is_some_and(Error::is_not_found));
    assert_eq!(service.list_key_calls(), 1);
}

// ============================================================================
// Insert modes
// ============================================================================

#[tokio::test]
async fn test_insert_modes() {
    let (server, _service) = FakeKvService::start().await;
    let client = client_for(&server);
    let store = client
        .create_store(&CreateStoreInput::new("modes"))
        .await
        .unwrap();
    let id = store.store_id.as_str();

    client
        .insert_key(&InsertKeyInput::new(id, "k", "mid"))
        .await
        .unwrap();
    client
        .insert_key(&InsertKeyInput::new(id, "k", "-end").mode(InsertMode::Append))
        .await
        .unwrap();
    client
        .insert_key(&InsertKeyInput::new(id, "k", "start-").mode(InsertMode::Prepend))
        .await
        .unwrap();
    assert_eq!(
        client.get_key(id, "k").await.unwrap().as_deref(),
        Some(&b"start-mid-end"[..])
    );

    let err = client
        .insert_key(&InsertKeyInput::new(id, "k", "again").mode(InsertMode::Add))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(412));
}

#[tokio::test]
async fn test_rejects_bad_token() {
    let (server, _service) = FakeKvService::start().await;
    let client = KvStoreClient::from_config(
        &kvstore_client::ClientConfig::new(server.uri()).with_token("wrong"),
    )
    .unwrap();

    let err = client
        .list_stores(&ListStoresInput::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
}
