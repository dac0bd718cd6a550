//! HTTP client module
//!
//! Provides the transport used by the store client.
//!
//! # Features
//!
//! - **Status Mapping**: 429 and non-2xx responses become typed errors
//! - **Rate Limiting**: Optional token bucket rate limiter using governor
//! - **Path Building**: Store IDs and key names are encoded as single path segments
//! - **Authentication**: Integration with auth module
//!
//! Requests are never retried. A failed call is reported to the caller as is.

mod client;
mod rate_limit;

pub(crate) use client::is_dot_segment;
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestBody, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
