//! HTTP client with rate limiting and error classification
//!
//! Handles:
//! - Base URL resolution and path segment encoding
//! - Optional client-side rate limiting
//! - JSON and raw request bodies
//! - Mapping responses to transport, service and decode errors

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Longest response body excerpt kept in decode error messages
const BODY_EXCERPT_LEN: usize = 200;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            rate_limit: None,
            default_headers: HashMap::new(),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Request body
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Serialized as JSON with `application/json`
    Json(Value),
    /// Sent verbatim with the given content type
    Raw {
        /// Content-Type header value
        content_type: String,
        /// Body bytes
        bytes: Bytes,
    },
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: Option<RequestBody>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter when the value is present
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a header when the value is present
    #[must_use]
    pub fn header_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.header(key, value),
            None => self,
        }
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Set a raw body with an explicit content type
    #[must_use]
    pub fn raw(mut self, content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        self.body = Some(RequestBody::Raw {
            content_type: content_type.into(),
            bytes: bytes.into(),
        });
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client used by the store client
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::default(),
            rate_limiter,
        })
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.set_authenticator(auth_config);
        Ok(client)
    }

    /// Set the authenticator
    pub fn set_authenticator(&mut self, auth_config: AuthConfig) {
        self.authenticator = Authenticator::new(auth_config);
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, url, config).await
    }

    /// Make a PUT request with config
    pub async fn put_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::PUT, url, config).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Response> {
        self.request(Method::DELETE, url, RequestConfig::default())
            .await
    }

    /// Make a generic request to an absolute URL (see [`endpoint`](Self::endpoint))
    ///
    /// Any non-2xx status is returned as an error carrying the response body.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let timeout = config.timeout.unwrap_or(self.config.timeout);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(method.clone(), url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        match config.body {
            Some(RequestBody::Json(ref body)) => {
                req = req.json(body);
            }
            Some(RequestBody::Raw {
                ref content_type,
                ref bytes,
            }) => {
                req = req
                    .header(CONTENT_TYPE, content_type.as_str())
                    .body(bytes.clone());
            }
            None => {}
        }

        req = req.timeout(timeout);
        req = self.authenticator.apply(req);

        debug!("Sending request: {} {}", method, url);

        let response = req
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited {
                retry_after_seconds: extract_retry_after(&response),
            });
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            debug!(
                "Request failed: {} {} -> {}",
                method,
                url,
                status.as_u16()
            );
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(
            "Request succeeded: {} {} -> {}",
            method,
            url,
            status.as_u16()
        );
        Ok(response)
    }

    /// Make a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        let response = self.request(method, url, config).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, timeout))?;
        decode_json(&body)
    }

    /// Read a successful response's body
    pub async fn read_bytes(&self, response: Response) -> Result<Bytes> {
        response
            .bytes()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request_json(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config and parse the JSON response
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request_json(Method::GET, url, config).await
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Absolute URL for a path made of raw segments.
    ///
    /// Each segment is percent-encoded on its own, so a key containing `/`
    /// stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String> {
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(Error::invalid_value(
                "path segment",
                format!("'{segment}' cannot be used as a path segment"),
            ));
        }

        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("Base URL is not configured"))?;

        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("Base URL cannot carry a path: {base}")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url.into())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Decode a JSON body, keeping a short excerpt of the payload on failure
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        let text = String::from_utf8_lossy(body);
        let excerpt: String = text.chars().take(BODY_EXCERPT_LEN).collect();
        Error::decode(format!("{e} (body: {excerpt:?})"))
    })
}

/// Whether a segment would be dropped or resolved away by URL normalization
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> Error {
    if e.is_timeout() {
        Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        Error::Http(e)
    }
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
