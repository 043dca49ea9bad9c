//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the current user and bearer token; `token_store` persists
//! the token across runs.

pub mod session;
pub mod token_store;
