//! `/auth/*` endpoints.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{LoginRequest, LoginResponse, LoginResult, RegisterUserRequest, RegisterUserResponse, User, UserResponse};

/// `POST /auth/login`. Does not touch the session; see `SessionStore::sign_in`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn login(http: &HttpClient, username: &str, password: &str) -> Result<LoginResult, ApiError> {
    let wire: LoginResponse = http.post("/auth/login", &LoginRequest { username, password }).await?;
    Ok(wire.into())
}

/// `POST /auth/register` (admin only).
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn register_user(http: &HttpClient, username: &str, password: &str, admin: bool) -> Result<User, ApiError> {
    let wire: RegisterUserResponse =
        http.post("/auth/register", &RegisterUserRequest { username, password, admin }).await?;
    Ok(wire.into())
}

/// `GET /auth/current-user`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or schema failure.
pub async fn fetch_authenticated_user(http: &HttpClient) -> Result<User, ApiError> {
    let wire: UserResponse = http.get("/auth/current-user").await?;
    Ok(wire.into())
}
