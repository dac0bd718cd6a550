//! CLI commands and argument parsing

use crate::types::{Consistency, InsertMode, StoreLocation};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Key-value store command-line client
#[derive(Parser, Debug)]
#[command(name = "kvstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Service endpoint (overrides config and KVSTORE_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API token (overrides config and KVSTORE_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stores
    Stores {
        #[command(subcommand)]
        command: StoreCommand,
    },

    /// Manage keys in a store
    Keys {
        #[command(subcommand)]
        command: KeyCommand,
    },
}

/// Store subcommands
#[derive(Subcommand, Debug)]
pub enum StoreCommand {
    /// List all stores
    List {
        /// Page size (0 = service default)
        #[arg(long, default_value = "0")]
        limit: u32,
    },

    /// Create a store
    Create {
        /// Store name
        name: String,

        /// Location hint (US, EU, ASIA, AUS)
        #[arg(long)]
        location: Option<StoreLocation>,
    },

    /// Show a store
    Get {
        /// Store ID
        store_id: String,
    },

    /// Delete a store
    Delete {
        /// Store ID
        store_id: String,
    },
}

/// Key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommand {
    /// List keys
    List {
        /// Store ID
        store_id: String,

        /// Page size (0 = service default)
        #[arg(long, default_value = "0")]
        limit: u32,

        /// Read consistency (eventual, strong)
        #[arg(long)]
        consistency: Option<Consistency>,

        /// Only list keys with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Print a key's value
    Get {
        /// Store ID
        store_id: String,
        /// Key name
        key: String,
    },

    /// Write a key
    Put {
        /// Store ID
        store_id: String,
        /// Key name
        key: String,
        /// Value
        value: String,

        /// Write mode (overwrite, add, append, prepend)
        #[arg(long, default_value = "overwrite")]
        mode: InsertMode,

        /// Metadata stored with the value
        #[arg(long)]
        metadata: Option<String>,

        /// Expire the key after this many seconds
        #[arg(long)]
        ttl: Option<u64>,
    },

    /// Delete a key
    Delete {
        /// Store ID
        store_id: String,
        /// Key name
        key: String,
    },

    /// Write many keys from a newline-delimited JSON file
    Batch {
        /// Store ID
        store_id: String,
        /// File with one {"key", "value" (base64)} record per line
        file: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Human-readable output
    Pretty,
}
