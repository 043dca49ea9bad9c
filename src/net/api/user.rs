//! `/users` endpoints. The backend restricts all of them to admins.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{UpdateUserRequest, User, UserResponse};

fn user_endpoint(user_id: i64) -> String {
    format!("/users/{user_id}")
}

/// The username is one percent-encoded path segment. Dot segments would be
/// resolved away by URL normalization, so they are refused outright.
fn user_by_username_endpoint(username: &str) -> Result<String, ApiError> {
    if matches!(username, "" | "." | "..") {
        return Err(ApiError::Validation(format!("username '{username}' is not a valid path segment")));
    }
    Ok(format!("/users/{}/by-username", urlencoding::encode(username)))
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_users(http: &HttpClient) -> Result<Vec<User>, ApiError> {
    let wire: Vec<UserResponse> = http.get("/users").await?;
    Ok(wire.into_iter().map(User::from).collect())
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_user(http: &HttpClient, user_id: i64) -> Result<User, ApiError> {
    let wire: UserResponse = http.get(&user_endpoint(user_id)).await?;
    Ok(wire.into())
}

/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure, and a
/// validation error without any request for an empty, `.` or `..` username.
pub async fn fetch_user_by_username(http: &HttpClient, username: &str) -> Result<User, ApiError> {
    let wire: UserResponse = http.get(&user_by_username_endpoint(username)?).await?;
    Ok(wire.into())
}

/// Change username and/or password; `None` leaves a field as is.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn update_user(
    http: &HttpClient,
    user_id: i64,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<User, ApiError> {
    let wire: UserResponse = http.patch(&user_endpoint(user_id), &UpdateUserRequest { username, password }).await?;
    Ok(wire.into())
}

/// Returns the deleted user.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn delete_user(http: &HttpClient, user_id: i64) -> Result<User, ApiError> {
    let wire: UserResponse = http.delete(&user_endpoint(user_id)).await?;
    Ok(wire.into())
}
