//! Batch modification payloads
//!
//! The batch endpoint takes newline-delimited JSON, one record per key, with
//! the value base64-encoded (standard alphabet).

use crate::error::{Error, Result};
use crate::types::InsertMode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Content type of batch request bodies
pub const BATCH_CONTENT_TYPE: &str = "application/x-ndjson";

/// One record of a batch request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub key: String,
    /// Base64-encoded value
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_live_sec: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<InsertMode>,
}

impl BatchEntry {
    /// Create an entry, encoding the raw value
    pub fn new(key: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        Self {
            key: key.into(),
            value: STANDARD.encode(value),
            metadata: None,
            time_to_live_sec: None,
            mode: None,
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
    pub fn mode(mut self, mode: InsertMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Decoded value bytes
    pub fn value_bytes(&self) -> Result<Vec<u8>> {
        STANDARD.decode(&self.value).map_err(|e| {
            Error::invalid_value("value", format!("key '{}': invalid base64: {e}", self.key))
        })
    }
}

/// Encode entries as a batch request body
pub fn encode_batch(entries: &[BatchEntry]) -> Result<String> {
    let mut body = String::new();
    for entry in entries {
        body.push_str(&serde_json::to_string(entry)?);
        body.push('\n');
    }
    Ok(body)
}

/// Parse a batch request body.
///
/// Blank lines and surrounding whitespace are ignored; every other line must
/// be one record with a non-empty key and a valid base64 value.
pub fn parse_batch(body: &str) -> Result<Vec<BatchEntry>> {
    body.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            let entry: BatchEntry = serde_json::from_str(line)
                .map_err(|e| Error::decode(format!("batch line {line_no}: {e}")))?;
            if entry.key.is_empty() {
                return Err(Error::invalid_value(
                    "key",
                    format!("batch line {line_no}: empty key"),
                ));
            }
            entry.value_bytes()?;
            Ok(entry)
        })
        .collect()
}
