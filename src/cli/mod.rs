//! CLI module
//!
//! Command-line interface over the store client.
//!
//! # Commands
//!
//! - `stores list|create|get|delete` - Manage stores
//! - `keys list|get|put|delete|batch` - Manage keys in a store

mod commands;
mod runner;

pub use commands::{Cli, Commands, KeyCommand, OutputFormat, StoreCommand};
pub use runner::Runner;
