//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` performs requests and validates responses, `api` holds one accessor
//! per backend operation, `types` defines wire schemas and application
//! records, and `timestamp` is the shared date transform.

pub mod api;
pub mod http;
pub mod timestamp;
pub mod types;
