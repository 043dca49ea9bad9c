//! Application shell: boot sequence and guarded navigation.
//!
//! DESIGN
//! ======
//! Boot order is fixed: read the persisted token, build the session store,
//! build the HTTP client on top of it, then await the current-user fetch.
//! Only after that fetch settles does `navigate` evaluate any guard, so a
//! returning user is not bounced to the login route while their record is
//! still in flight.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::notify::Notifier;
use crate::router::{self, Route};
use crate::state::session::SessionStore;
use crate::state::token_store::{FileTokenStore, TokenStore};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no route matches '{0}'")]
    NotFound(String),
    #[error("navigation to '{0}' did not settle")]
    RedirectLoop(String),
}

pub struct App {
    session: Arc<SessionStore>,
    http: HttpClient,
    notifier: Notifier,
    current: Option<Route>,
}

impl App {
    /// Boot with the token persisted under the config directory.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub async fn boot(config: &ClientConfig, notifier: Notifier) -> Result<Self, ApiError> {
        let tokens = Arc::new(FileTokenStore::new(config.storage_path()));
        Self::boot_with(config, tokens, notifier).await
    }

    /// Boot with an explicit token store.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub async fn boot_with(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
        notifier: Notifier,
    ) -> Result<Self, ApiError> {
        let session = Arc::new(SessionStore::new(tokens, notifier.clone()));
        let http = HttpClient::new(config, Arc::clone(&session))?;
        session.fetch_user(&http).await;
        tracing::debug!(logged_in = session.is_logged_in(), admin = session.is_admin(), "app booted");
        Ok(Self { session, http, notifier, current: None })
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Route of the last successful navigation.
    #[must_use]
    pub fn current_route(&self) -> Option<Route> {
        self.current
    }

    /// Navigate to `path`, following guard redirects until one is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] for unknown paths.
    pub fn navigate(&mut self, path: &str) -> Result<Route, NavigationError> {
        let mut target = Route::from_path(path).ok_or_else(|| NavigationError::NotFound(path.to_owned()))?;
        let session = self.session.snapshot();

        for _ in 0..Route::ALL.len() {
            let decision = router::guard(target, &session);
            match decision.redirect_target() {
                None => {
                    tracing::debug!(route = %target, "navigation allowed");
                    self.current = Some(target);
                    return Ok(target);
                }
                Some(next) => {
                    tracing::debug!(from = %target, to = %next, ?decision, "navigation redirected");
                    target = next;
                }
            }
        }
        Err(NavigationError::RedirectLoop(path.to_owned()))
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
