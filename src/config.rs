//! Client configuration
//!
//! Settings come from, in increasing priority: defaults, a YAML or JSON
//! file, `KVSTORE_*` environment variables, then explicit overrides by the
//! caller (the CLI applies its flags last).

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Service endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.fastly.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "KVSTORE_ENDPOINT";

/// Environment variable carrying the API token
pub const ENV_API_TOKEN: &str = "KVSTORE_API_TOKEN";

/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT_SECS: &str = "KVSTORE_TIMEOUT_SECS";

/// Settings for building a [`KvStoreClient`](crate::kv::KvStoreClient)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the service
    pub endpoint: String,

    /// API token sent with every request
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Overrides the default `kvstore-client/<version>` user agent
    pub user_agent: Option<String>,

    /// Client-side rate limit; unlimited when unset
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            rate_limit: None,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

impl ClientConfig {
    /// Config pointing at a specific endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the API token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Load configuration from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Overlay `KVSTORE_*` variables read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(token) = get(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        if let Some(timeout) = get(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::invalid_value(ENV_TIMEOUT_SECS, format!("not a number: '{timeout}'"))
            })?;
        }
        Ok(self)
    }

    /// Check that the configuration can produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::missing_field("endpoint"));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", format!("{e}: '{}'", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.endpoint)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(limit) = &self.rate_limit {
            builder = builder.rate_limit(limit.clone());
        }
        builder.build()
    }

    /// Credentials
    pub fn auth_config(&self) -> AuthConfig {
        match &self.api_token {
            Some(token) if !token.is_empty() => AuthConfig::api_token(token),
            _ => AuthConfig::None,
        }
    }
}
