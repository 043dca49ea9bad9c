//! One accessor per backend operation.
//!
//! Each accessor declares its request shape and response schema, makes a
//! single call through [`HttpClient`](super::http::HttpClient) and maps the
//! validated body to an application record. No retries, no caching, no
//! error handling: failures reach the caller as-is.

pub mod auth;
pub mod language;
pub mod snippet;
pub mod tag;
pub mod user;
