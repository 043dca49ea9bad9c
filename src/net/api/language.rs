//! `/languages` endpoint.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::Language;

/// Languages a snippet file may be tagged with.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_languages(http: &HttpClient) -> Result<Vec<Language>, ApiError> {
    http.get("/languages").await
}
