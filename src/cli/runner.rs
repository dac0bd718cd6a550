//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, KeyCommand, OutputFormat, StoreCommand};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::kv::{
    parse_batch, CreateStoreInput, InsertKeyInput, KvStore, KvStoreClient, ListKeysInput,
    ListStoresInput,
};
use crate::types::{Consistency, InsertMode, StoreLocation};
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = KvStoreClient::from_config(&self.client_config()?)?;

        match &self.cli.command {
            Commands::Stores { command } => match command {
                StoreCommand::List { limit } => self.list_stores(&client, *limit).await,
                StoreCommand::Create { name, location } => {
                    self.create_store(&client, name, *location).await
                }
                StoreCommand::Get { store_id } => {
                    let store = client.get_store(store_id).await?;
                    self.print_store(&store)
                }
                StoreCommand::Delete { store_id } => {
                    client.delete_store(store_id).await?;
                    self.print_status(&format!("Deleted store {store_id}"))
                }
            },
            Commands::Keys { command } => match command {
                KeyCommand::List {
                    store_id,
                    limit,
                    consistency,
                    prefix,
                } => {
                    self.list_keys(&client, store_id, *limit, *consistency, prefix.as_deref())
                        .await
                }
                KeyCommand::Get { store_id, key } => self.get_key(&client, store_id, key).await,
                KeyCommand::Put {
                    store_id,
                    key,
                    value,
                    mode,
                    metadata,
                    ttl,
                } => {
                    self.put_key(&client, store_id, key, value, *mode, metadata.as_deref(), *ttl)
                        .await
                }
                KeyCommand::Delete { store_id, key } => {
                    client.delete_key(store_id, key).await?;
                    self.print_status(&format!("Deleted key '{key}'"))
                }
                KeyCommand::Batch { store_id, file } => {
                    self.batch(&client, store_id, file).await
                }
            },
        }
    }

    /// Resolve configuration: file, then environment, then flags
    fn client_config(&self) -> Result<ClientConfig> {
        let base = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        let mut config = base.with_env_overrides(|name| std::env::var(name).ok())?;

        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(token) = &self.cli.token {
            config.api_token = Some(token.clone());
        }

        debug!("Using config: {:?}", config);
        Ok(config)
    }

    async fn list_stores(&self, client: &KvStoreClient, limit: u32) -> Result<()> {
        let mut pages = client.list_stores_paginator(ListStoresInput::new().limit(limit));
        while pages.advance().await {
            for store in pages.stores() {
                self.print_store(store)?;
            }
        }
        pages.finish()
    }

    async fn create_store(
        &self,
        client: &KvStoreClient,
        name: &str,
        location: Option<StoreLocation>,
    ) -> Result<()> {
        let mut input = CreateStoreInput::new(name);
        input.location = location;
        let store = client.create_store(&input).await?;
        self.print_store(&store)
    }

    async fn list_keys(
        &self,
        client: &KvStoreClient,
        store_id: &str,
        limit: u32,
        consistency: Option<Consistency>,
        prefix: Option<&str>,
    ) -> Result<()> {
        let mut input = ListKeysInput::new(store_id).limit(limit);
        input.consistency = consistency;
        input.prefix = prefix.map(str::to_string);

        let mut pages = client.list_keys_paginator(input);
        while pages.advance().await {
            let mut stdout = std::io::stdout().lock();
            for key in pages.keys() {
                match self.cli.format {
                    OutputFormat::Json => writeln!(stdout, "{}", json!(key))?,
                    OutputFormat::Pretty => writeln!(stdout, "{key}")?,
                }
            }
        }

        debug!(
            "Listed {} keys in {} pages",
            pages.state().total_fetched,
            pages.state().pages_fetched
        );
        pages.finish()
    }

    async fn get_key(&self, client: &KvStoreClient, store_id: &str, key: &str) -> Result<()> {
        let value = client.get_key(store_id, key).await?.ok_or_else(|| {
            Error::Other(format!("Key '{key}' not found in store {store_id}"))
        })?;

        let mut stdout = std::io::stdout().lock();
        match self.cli.format {
            OutputFormat::Json => writeln!(
                stdout,
                "{}",
                json!({ "key": key, "value": String::from_utf8_lossy(&value) })
            )?,
            OutputFormat::Pretty => {
                stdout.write_all(&value)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    async fn put_key(
        &self,
        client: &KvStoreClient,
        store_id: &str,
        key: &str,
        value: &str,
        mode: InsertMode,
        metadata: Option<&str>,
        ttl: Option<u64>,
    ) -> Result<()> {
        let mut input = InsertKeyInput::new(store_id, key, value.to_string()).mode(mode);
        input.metadata = metadata.map(str::to_string);
        input.time_to_live_sec = ttl;

        client.insert_key(&input).await?;
        self.print_status(&format!("Wrote key '{key}'"))
    }

    async fn batch(&self, client: &KvStoreClient, store_id: &str, file: &Path) -> Result<()> {
        let body = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read batch file {}", file.display()))?;
        let entries = parse_batch(&body)?;
        if entries.is_empty() {
            return Err(Error::config(format!(
                "Batch file {} has no records",
                file.display()
            )));
        }

        client.batch_modify(store_id, body).await?;
        self.print_status(&format!("Wrote {} keys", entries.len()))
    }

    fn print_store(&self, store: &KvStore) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(store)?),
            OutputFormat::Pretty => {
                let created = store
                    .created_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!("{}\t{}\t{}", store.store_id, store.name, created);
            }
        }
        Ok(())
    }

    fn print_status(&self, message: &str) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", json!({ "status": "ok", "message": message })),
            OutputFormat::Pretty => println!("{message}"),
        }
        Ok(())
    }
}
