//! In-memory store service for integration tests
//!
//! Mounted on a wiremock server, it answers the `/resources/stores/kv` API
//! with real state so flows like create → insert → list can run end to end.

#![allow(dead_code)]

use chrono::Utc;
use kvstore_client::kv::parse_batch;
use kvstore_client::{ClientConfig, KvStoreClient};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token the fake service accepts
pub const TEST_TOKEN: &str = "integration-token";

/// Page size used when a listing omits `limit`
pub const DEFAULT_PAGE_SIZE: usize = 100;

const LOCATIONS: [&str; 4] = ["US", "EU", "ASIA", "AUS"];

#[derive(Debug)]
struct Store {
    name: String,
    created_at: String,
    keys: BTreeMap<String, Vec<u8>>,
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    stores: BTreeMap<String, Store>,
    list_key_calls: usize,
}

/// Stateful responder for the store API
#[derive(Debug, Clone, Default)]
pub struct FakeKvService {
    state: Arc<Mutex<State>>,
}

impl FakeKvService {
    /// Start a server with the service mounted on it
    pub async fn start() -> (MockServer, FakeKvService) {
        let server = MockServer::start().await;
        let service = FakeKvService::default();
        Mock::given(path_regex("^/resources/stores/kv"))
            .respond_with(service.clone())
            .mount(&server)
            .await;
        (server, service)
    }

    /// Number of key listing requests served so far
    pub fn list_key_calls(&self) -> usize {
        self.state.lock().unwrap().list_key_calls
    }

    /// Number of stores currently held
    pub fn store_count(&self) -> usize {
        self.state.lock().unwrap().stores.len()
    }

    fn handle(&self, request: &Request) -> ResponseTemplate {
        let authorized = request
            .headers
            .get("Fastly-Key")
            .and_then(|v| v.to_str().ok())
            == Some(TEST_TOKEN);
        if !authorized {
            return error(401, "missing or invalid token");
        }

        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|s| s.skip(3).map(str::to_string).collect())
            .unwrap_or_default();
        let query: BTreeMap<String, String> = request.url.query_pairs().into_owned().collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        match (request.method.as_str(), segments.as_slice()) {
            ("GET", []) => list_stores(state, &query),
            ("POST", []) => create_store(state, &query, &request.body),
            ("GET", [id]) => match state.stores.get(*id) {
                Some(store) => ResponseTemplate::new(200).set_body_json(store_json(id, store)),
                None => error(404, "store not found"),
            },
            ("DELETE", [id]) => match state.stores.get(*id) {
                None => error(404, "store not found"),
                Some(store) if !store.keys.is_empty() => error(409, "store is not empty"),
                Some(_) => {
                    state.stores.remove(*id);
                    ResponseTemplate::new(204)
                }
            },
            ("GET", [id, "keys"]) => {
                state.list_key_calls += 1;
                match state.stores.get(*id) {
                    Some(store) => list_keys(store, &query),
                    None => error(404, "store not found"),
                }
            }
            (method, [id, "keys", key]) => {
                let Some(store) = state.stores.get_mut(*id) else {
                    return error(404, "store not found");
                };
                key_operation(store, method, key, &query, &request.body)
            }
            ("PUT", [id, "batch"]) => {
                let Some(store) = state.stores.get_mut(*id) else {
                    return error(404, "store not found");
                };
                batch(store, &request.body)
            }
            _ => error(405, "unsupported route"),
        }
    }
}

impl Respond for FakeKvService {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.handle(request)
    }
}

/// Client pointed at the fake service
pub fn client_for(server: &MockServer) -> KvStoreClient {
    KvStoreClient::from_config(&ClientConfig::new(server.uri()).with_token(TEST_TOKEN)).unwrap()
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "msg": message }))
}

fn store_json(id: &str, store: &Store) -> Value {
    json!({
        "id": id,
        "name": store.name,
        "created_at": store.created_at,
        "updated_at": store.created_at,
    })
}

fn page_limit(query: &BTreeMap<String, String>) -> usize {
    query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Take one page after the exclusive `cursor`, returning the next cursor
fn paginate<'a>(
    names: impl Iterator<Item = &'a String>,
    query: &BTreeMap<String, String>,
) -> (Vec<&'a String>, Option<String>) {
    let limit = page_limit(query);
    let cursor = query.get("cursor");
    let mut remaining = names.filter(|name| cursor.map_or(true, |c| name.as_str() > c.as_str()));

    let page: Vec<&String> = remaining.by_ref().take(limit).collect();
    let next_cursor = if remaining.next().is_some() {
        page.last().map(|name| (*name).clone())
    } else {
        None
    };
    (page, next_cursor)
}

fn list_stores(state: &State, query: &BTreeMap<String, String>) -> ResponseTemplate {
    let (ids, next_cursor) = paginate(state.stores.keys(), query);
    let data: Vec<Value> = ids
        .iter()
        .map(|id| store_json(id, &state.stores[id.as_str()]))
        .collect();
    ResponseTemplate::new(200).set_body_json(json!({
        "data": data,
        "meta": { "next_cursor": next_cursor, "limit": page_limit(query) },
    }))
}

fn create_store(
    state: &mut State,
    query: &BTreeMap<String, String>,
    body: &[u8],
) -> ResponseTemplate {
    if let Some(location) = query.get("location") {
        if !LOCATIONS.contains(&location.as_str()) {
            return error(400, "invalid location");
        }
    }
    let Some(name) = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v["name"].as_str().map(str::to_string))
    else {
        return error(400, "name is required");
    };

    state.next_id += 1;
    let id = format!("st_{:04}", state.next_id);
    let store = Store {
        name,
        created_at: Utc::now().to_rfc3339(),
        keys: BTreeMap::new(),
    };
    let body = store_json(&id, &store);
    state.stores.insert(id, store);
    ResponseTemplate::new(201).set_body_json(body)
}

fn list_keys(store: &Store, query: &BTreeMap<String, String>) -> ResponseTemplate {
    let prefix = query.get("prefix").cloned().unwrap_or_default();
    let names = store.keys.keys().filter(|k| k.starts_with(&prefix));
    let (page, next_cursor) = paginate(names, query);
    ResponseTemplate::new(200).set_body_json(json!({
        "data": page,
        "meta": {
            "next_cursor": next_cursor,
            "limit": page_limit(query),
            "consistency": query.get("consistency").map_or("eventual", String::as_str),
        },
    }))
}

fn key_operation(
    store: &mut Store,
    method: &str,
    key: &str,
    query: &BTreeMap<String, String>,
    body: &[u8],
) -> ResponseTemplate {
    match method {
        "GET" => match store.keys.get(key) {
            Some(value) => ResponseTemplate::new(200).set_body_bytes(value.clone()),
            None => error(404, "key not found"),
        },
        "PUT" => {
            let flag = |name: &str| query.get(name).is_some_and(|v| v == "true");
            let existing = store.keys.get(key).cloned();
            let value = match existing {
                Some(_) if flag("add") => return error(412, "key already exists"),
                Some(mut old) if flag("append") => {
                    old.extend_from_slice(body);
                    old
                }
                Some(old) if flag("prepend") => {
                    let mut value = body.to_vec();
                    value.extend_from_slice(&old);
                    value
                }
                _ => body.to_vec(),
            };
            store.keys.insert(key.to_string(), value);
            ResponseTemplate::new(200)
        }
        "DELETE" => match store.keys.remove(key) {
            Some(_) => ResponseTemplate::new(204),
            None => error(404, "key not found"),
        },
        _ => error(405, "unsupported method"),
    }
}

fn batch(store: &mut Store, body: &[u8]) -> ResponseTemplate {
    let Ok(text) = std::str::from_utf8(body) else {
        return error(400, "body is not utf-8");
    };
    let entries = match parse_batch(text) {
        Ok(entries) => entries,
        Err(e) => return error(400, &e.to_string()),
    };
    for entry in entries {
        let Ok(value) = entry.value_bytes() else {
            return error(400, "invalid value");
        };
        store.keys.insert(entry.key, value);
    }
    ResponseTemplate::new(200)
}
