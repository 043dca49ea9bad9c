//! Bearer-token session for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per application instance. The HTTP client reads
//! the token from it on every request and calls [`SessionStore::logout`] when
//! the server reports an expired token. The router reads the
//! logged-in/admin predicates before every navigation.
//!
//! DESIGN
//! ======
//! State lives in a `tokio::sync::watch` channel: readers borrow the current
//! snapshot, observers `subscribe()` and are woken on every mutation. Only the
//! methods below mutate it. `logout` resets the same channel in place, so
//! receivers obtained before a logout keep seeing updates afterwards.
//!
//! `fetch_user` suspends once (the network call) and never holds a borrow
//! across that await. Its result is only adopted if the token it was issued
//! with is still the held token, so `user` never outlives `token`.
//! Overlapping calls for the same token are not coordinated; the last one to
//! finish decides `user`.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ApiError;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::User;
use crate::notify::{Notifier, Severity};

use super::token_store::TokenStore;

const FETCH_USER_FALLBACK: &str = "Failed to fetch current user";

/// Snapshot of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Absent user is simply "not admin".
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}

pub struct SessionStore {
    state: watch::Sender<Session>,
    tokens: Arc<dyn TokenStore>,
    notifier: Notifier,
}

impl SessionStore {
    /// Boot a store from whatever token was persisted by a previous run.
    ///
    /// A storage read failure is logged and treated as "no token".
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>, notifier: Notifier) -> Self {
        let token = match tokens.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted token");
                None
            }
        };
        tracing::debug!(has_token = token.is_some(), "session store initialized");
        let (state, _) = watch::channel(Session { user: None, token, loading: true });
        Self { state, tokens, notifier }
    }

    // =========================================================================
    // READERS
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    /// Observe every subsequent mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    // =========================================================================
    // MUTATORS
    // =========================================================================

    /// Resolve the current user for the held token.
    ///
    /// Failures never propagate: they end up as an error notification.
    pub async fn fetch_user(&self, http: &HttpClient) {
        let Some(requested_with) = self.token() else {
            self.state.send_modify(|s| s.loading = false);
            return;
        };

        match api::auth::fetch_authenticated_user(http).await {
            Ok(user) => {
                self.state.send_modify(|s| {
                    s.loading = false;
                    // A logout or re-login during the request makes this user stale.
                    if s.token.as_deref() == Some(requested_with.as_str()) {
                        tracing::info!(user_id = user.id, username = %user.username, "current user loaded");
                        s.user = Some(user);
                    } else {
                        tracing::debug!(user_id = user.id, "token changed during fetch; discarding user");
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch current user");
                self.state.send_modify(|s| s.loading = false);
                let detail = e.payload().map_or_else(|| FETCH_USER_FALLBACK.to_owned(), |payload| payload.error);
                self.notifier.show(Severity::Error, "Error", &detail);
            }
        }
    }

    /// Unconditional replace.
    pub fn set_user(&self, user: User) {
        self.state.send_modify(|s| s.user = Some(user));
    }

    /// Hold and persist a freshly issued token.
    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.tokens.save(token) {
            tracing::warn!(error = %e, "failed to persist token");
        }
        self.state.send_modify(|s| s.token = Some(token.to_owned()));
    }

    /// Exchange credentials for a token and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Returns the login call's error unchanged; the session is not touched.
    pub async fn sign_in(&self, http: &HttpClient, username: &str, password: &str) -> Result<User, ApiError> {
        let result = api::auth::login(http, username, password).await?;
        self.set_token(&result.token);
        self.set_user(result.user.clone());
        tracing::info!(user_id = result.user.id, "signed in");
        Ok(result.user)
    }

    /// Drop user and token, forget the persisted token, tell the user.
    ///
    /// Safe to call repeatedly; each call re-emits the notification.
    pub fn logout(&self) {
        self.state.send_modify(|s| {
            s.user = None;
            s.token = None;
        });
        if let Err(e) = self.tokens.clear() {
            tracing::warn!(error = %e, "failed to remove persisted token");
        }
        tracing::info!("session logged out");
        self.notifier.show(Severity::Info, "Logged out", "You have been logged out.");
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
