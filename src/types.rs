//! Common types used throughout the client
//!
//! Enumerations shared by the store client, the CLI and the config layer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Opaque store identifier assigned by the service
pub type StoreId = String;

// ============================================================================
// Consistency
// ============================================================================

/// Read consistency requested from the service for a key listing.
///
/// The service decides what each mode means; the client only forwards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    /// The service may serve stale data for lower latency
    Eventual,
    /// The service must reflect all acknowledged writes
    Strong,
}

impl Consistency {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Consistency::Eventual => "eventual",
            Consistency::Strong => "strong",
        }
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Consistency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eventual" => Ok(Consistency::Eventual),
            "strong" => Ok(Consistency::Strong),
            other => Err(Error::invalid_value(
                "consistency",
                format!("expected 'eventual' or 'strong', got '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Store Location
// ============================================================================

/// Location hint for where a new store's primary data lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoreLocation {
    Us,
    Eu,
    Asia,
    Aus,
}

impl StoreLocation {
    /// All known locations
    pub const ALL: [StoreLocation; 4] = [
        StoreLocation::Us,
        StoreLocation::Eu,
        StoreLocation::Asia,
        StoreLocation::Aus,
    ];

    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreLocation::Us => "US",
            StoreLocation::Eu => "EU",
            StoreLocation::Asia => "ASIA",
            StoreLocation::Aus => "AUS",
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(StoreLocation::Us),
            "EU" => Ok(StoreLocation::Eu),
            "ASIA" => Ok(StoreLocation::Asia),
            "AUS" => Ok(StoreLocation::Aus),
            other => Err(Error::invalid_value(
                "location",
                format!("unknown location '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Insert Mode
// ============================================================================

/// How a write combines with an existing value under the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    /// Replace any existing value
    #[default]
    Overwrite,
    /// Only write if the key does not exist yet
    Add,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

impl InsertMode {
    /// Query flag that selects this mode on single-key inserts
    pub fn query_flag(&self) -> Option<&'static str> {
        match self {
            InsertMode::Overwrite => None,
            InsertMode::Add => Some("add"),
            InsertMode::Append => Some("append"),
            InsertMode::Prepend => Some("prepend"),
        }
    }
}

impl FromStr for InsertMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(InsertMode::Overwrite),
            "add" => Ok(InsertMode::Add),
            "append" => Ok(InsertMode::Append),
            "prepend" => Ok(InsertMode::Prepend),
            other => Err(Error::invalid_value(
                "mode",
                format!("expected overwrite, add, append or prepend, got '{other}'"),
            )),
        }
    }
}
