//! `/snippets` endpoints, including attached tags and files.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{
    CreateFileRequest, CreateSnippetRequest, SearchSnippetsRequest, Snippet, SnippetFile, SnippetSearchResult, Tag,
    UpdateFileRequest, UpdateSnippetRequest,
};

fn snippet_endpoint(snippet_id: i64) -> String {
    format!("/snippets/{snippet_id}")
}

fn snippet_tags_endpoint(snippet_id: i64) -> String {
    format!("/snippets/{snippet_id}/tags")
}

fn snippet_files_endpoint(snippet_id: i64) -> String {
    format!("/snippets/{snippet_id}/files")
}

fn snippet_tag_endpoint(snippet_id: i64, tag_id: i64) -> String {
    format!("/snippets/{snippet_id}/tags/{tag_id}")
}

fn snippet_file_endpoint(snippet_id: i64, file_id: i64) -> String {
    format!("/snippets/{snippet_id}/files/{file_id}")
}

// =============================================================================
// SNIPPETS
// =============================================================================

/// Search the current user's snippets. `None` filters are sent as `null`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_paginated_snippets(
    http: &HttpClient,
    search_query: &str,
    tag_ids: Option<&[i64]>,
    language_ids: Option<&[i64]>,
    page_number: u32,
    page_size: u32,
) -> Result<SnippetSearchResult, ApiError> {
    let body = SearchSnippetsRequest { search_query, tag_ids, language_ids, page_number, page_size };
    http.post("/snippets/search", &body).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn create_snippet(http: &HttpClient, title: &str, description: &str) -> Result<Snippet, ApiError> {
    http.post("/snippets", &CreateSnippetRequest { title, description }).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_snippet(http: &HttpClient, snippet_id: i64) -> Result<Snippet, ApiError> {
    http.get(&snippet_endpoint(snippet_id)).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn update_snippet(
    http: &HttpClient,
    snippet_id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Snippet, ApiError> {
    http.patch(&snippet_endpoint(snippet_id), &UpdateSnippetRequest { title, description }).await
}

/// Returns the deleted snippet.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn delete_snippet(http: &HttpClient, snippet_id: i64) -> Result<Snippet, ApiError> {
    http.delete(&snippet_endpoint(snippet_id)).await
}

// =============================================================================
// SNIPPET TAGS
// =============================================================================

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_snippet_tags(http: &HttpClient, snippet_id: i64) -> Result<Vec<Tag>, ApiError> {
    http.get(&snippet_tags_endpoint(snippet_id)).await
}

/// Answered with 204 No Content.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure, or if a body is returned.
pub async fn add_tag_to_snippet(http: &HttpClient, snippet_id: i64, tag_id: i64) -> Result<(), ApiError> {
    http.post_empty(&snippet_tag_endpoint(snippet_id, tag_id)).await
}

/// Answered with 204 No Content.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failure, or if a body is returned.
pub async fn remove_tag_from_snippet(http: &HttpClient, snippet_id: i64, tag_id: i64) -> Result<(), ApiError> {
    http.delete(&snippet_tag_endpoint(snippet_id, tag_id)).await
}

// =============================================================================
// SNIPPET FILES
// =============================================================================

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_snippet_files(http: &HttpClient, snippet_id: i64) -> Result<Vec<SnippetFile>, ApiError> {
    http.get(&snippet_files_endpoint(snippet_id)).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn create_file(
    http: &HttpClient,
    snippet_id: i64,
    file_name: &str,
    content: &str,
    language_id: i64,
) -> Result<SnippetFile, ApiError> {
    http.post(&snippet_files_endpoint(snippet_id), &CreateFileRequest { file_name, content, language_id }).await
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn update_file(
    http: &HttpClient,
    snippet_id: i64,
    file_id: i64,
    update: &UpdateFileRequest<'_>,
) -> Result<SnippetFile, ApiError> {
    http.patch(&snippet_file_endpoint(snippet_id, file_id), update).await
}

/// Returns the deleted file.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn delete_file(http: &HttpClient, snippet_id: i64, file_id: i64) -> Result<SnippetFile, ApiError> {
    http.delete(&snippet_file_endpoint(snippet_id, file_id)).await
}
