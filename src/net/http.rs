//! Typed HTTP client for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every accessor in `net::api` goes through [`HttpClient`]. It attaches the
//! session's bearer token, decodes the body, validates it against the
//! caller's declared type and classifies failures into [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! A 403 whose body is `{ "error": "Token expired" }` logs the session out
//! before the error is returned, so token expiry is handled the same way no
//! matter which accessor hit it.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::session::SessionStore;

pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url: config.api_base_url.trim_end_matches('/').to_owned(), session })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // VERBS
    // =========================================================================

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    /// POST without a request body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::POST, path, None::<&()>).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    /// Perform one request and validate the response body as `T`.
    ///
    /// An empty body validates as JSON `null`, so `T = ()` accepts 204 responses.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response was obtained.
    /// - [`ApiError::Response`] for non-2xx statuses.
    /// - [`ApiError::Validation`] when the body does not decode as `T`.
    pub async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(&method, path, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.session.token().filter(|token| !token.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        tracing::debug!(%method, path, "api request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "api request failed");
            let error = ApiError::Response { status: status.as_u16(), body };
            self.on_error(&error);
            return Err(error);
        }

        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api response failed validation");
            ApiError::Validation(format!("{method} {path}: {e}"))
        })
    }

    fn on_error(&self, error: &ApiError) {
        if error.is_token_expired() {
            tracing::info!("bearer token expired; logging out");
            self.session.logout();
        }
    }
}

/// Empty ⇒ `null`; JSON ⇒ parsed; anything else ⇒ the raw text as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
