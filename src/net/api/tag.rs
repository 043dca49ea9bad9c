//! `/tags` endpoints.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{CreateTagRequest, Tag, UpdateTagRequest};

fn tag_endpoint(tag_id: i64) -> String {
    format!("/tags/{tag_id}")
}

/// All tags owned by the current user.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_tags(http: &HttpClient) -> Result<Vec<Tag>, ApiError> {
    http.get("/tags").await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_tag(http: &HttpClient, tag_id: i64) -> Result<Tag, ApiError> {
    http.get(&tag_endpoint(tag_id)).await
}

/// `color` must be a color string the backend accepts (e.g. `#a1b2c3`).
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn create_tag(http: &HttpClient, name: &str, color: &str) -> Result<Tag, ApiError> {
    http.post("/tags", &CreateTagRequest { name, color }).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn update_tag(http: &HttpClient, tag_id: i64, name: Option<&str>, color: Option<&str>) -> Result<Tag, ApiError> {
    http.patch(&tag_endpoint(tag_id), &UpdateTagRequest { name, color }).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn delete_tag(http: &HttpClient, tag_id: i64) -> Result<Tag, ApiError> {
    http.delete(&tag_endpoint(tag_id)).await
}
