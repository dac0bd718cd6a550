//! Authentication module
//!
//! Supports: API token header (default `Fastly-Key`), none.
//!
//! The service authenticates every call with a static token, so there is
//! no token refresh or caching here.

mod authenticator;

pub use authenticator::{AuthConfig, Authenticator, DEFAULT_TOKEN_HEADER};
