//! # snippetvault
//!
//! Client core for the SnippetVault code-snippet service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns snippet storage, search ranking and tag/file persistence.
//! This crate owns everything on the client side of the wire: a typed HTTP
//! client that validates every response, one accessor per backend operation,
//! the bearer-token session store, the navigation guard and the notification
//! channel used to surface transient messages.
//!
//! `app::App` wires these together the same way on every boot: persisted
//! token → session store → HTTP client → awaited current-user fetch.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod notify;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
