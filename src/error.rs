//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call ends up in exactly one of three buckets:
//! - `Transport`: no HTTP response was obtained.
//! - `Response`: the server answered with a non-2xx status; the parsed body is kept.
//! - `Validation`: a 2xx body did not match the declared schema.
//!
//! Accessors never catch these. The session store converts `fetch_user`
//! failures into notifications; everything else reaches the caller.

use serde::Deserialize;
use serde_json::Value;

/// Message the backend uses to signal that the bearer token has expired.
pub const TOKEN_EXPIRED: &str = "Token expired";

/// Wire shape of every backend error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("response error: status {status}")]
    Response { status: u16, body: Value },

    /// The response body did not match the expected schema.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status for `Response` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `{ error }` payload, when this is a `Response` error whose body has that shape.
    #[must_use]
    pub fn payload(&self) -> Option<ErrorPayload> {
        match self {
            Self::Response { body, .. } => ErrorPayload::deserialize(body).ok(),
            _ => None,
        }
    }

    /// True for the one server-initiated session invalidation signal:
    /// status 403 with body `{ "error": "Token expired" }`.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        self.status() == Some(403) && self.payload().is_some_and(|payload| payload.error == TOKEN_EXPIRED)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
