//! Wire schemas and application records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Responses are decoded in two steps: serde validates the body against the
//! wire shape declared here, then `From` maps it to the application record.
//! For most resources the two shapes coincide and the mapping is the
//! identity. User shapes differ: the wire says `userId`/`admin` (or `id` on
//! registration), the application says `id`/`is_admin`. That rename happens
//! here and nowhere else.

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

// =============================================================================
// USERS
// =============================================================================

/// Application-level user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created: Timestamp,
    pub is_admin: bool,
}

/// `GET /auth/current-user`, `GET /users`, `DELETE /users/{id}`, ...
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub created: Timestamp,
    pub admin: bool,
}

impl From<UserResponse> for User {
    fn from(wire: UserResponse) -> Self {
        Self { id: wire.user_id, username: wire.username, created: wire.created, is_admin: wire.admin }
    }
}

/// `POST /auth/register` answers with `id` instead of `userId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub id: i64,
    pub username: String,
    pub created: Timestamp,
    pub admin: bool,
}

impl From<RegisterUserResponse> for User {
    fn from(wire: RegisterUserResponse) -> Self {
        Self { id: wire.id, username: wire.username, created: wire.created, is_admin: wire.admin }
    }
}

/// `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub created: Timestamp,
    pub admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for LoginResult {
    fn from(wire: LoginResponse) -> Self {
        Self {
            token: wire.token,
            user: User { id: wire.user_id, username: wire.username, created: wire.created, is_admin: wire.admin },
        }
    }
}

// =============================================================================
// SNIPPETS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created: Timestamp,
    pub updated: Timestamp,
}

/// Search hit with aggregate file/tag/language information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedSnippet {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created: Timestamp,
    pub updated: Timestamp,
    pub relevance: i64,
    pub file_count: i64,
    pub language_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSearchResult {
    pub total_count: i64,
    pub snippets: Vec<DetailedSnippet>,
}

/// A code file attached to a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetFile {
    pub id: i64,
    pub snippet_id: i64,
    pub language_id: i64,
    pub filename: String,
    pub content: String,
    pub created: Timestamp,
    pub updated: Timestamp,
}

// =============================================================================
// TAGS & LANGUAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub color: String,
    pub created: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterUserRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub admin: bool,
}

/// Fields left `None` are omitted and keep their current value.
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
}

/// `tag_ids`/`language_ids` of `None` are sent as JSON `null` (no filter).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippetsRequest<'a> {
    pub search_query: &'a str,
    pub tag_ids: Option<&'a [i64]>,
    pub language_ids: Option<&'a [i64]>,
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateSnippetRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateSnippetRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

/// The backend spells it `fileName` on create and `filename` on update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
    pub language_id: i64,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateTagRequest<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateTagRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
