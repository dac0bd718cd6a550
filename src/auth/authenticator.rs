//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use reqwest::RequestBuilder;
use std::fmt;

/// Header the store service reads the API token from
pub const DEFAULT_TOKEN_HEADER: &str = "Fastly-Key";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Token sent verbatim in a named header
    ApiKey {
        /// Header name
        header_name: String,
        /// The token value
        value: String,
    },
}

impl AuthConfig {
    /// API token in the service's default header
    pub fn api_token(token: impl Into<String>) -> Self {
        Self::ApiKey {
            header_name: DEFAULT_TOKEN_HEADER.to_string(),
            value: token.into(),
        }
    }

    /// Whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey { header_name, .. } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::ApiKey { header_name, value } => req.header(header_name.as_str(), value),
        }
    }

    /// Get the auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}
