use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::net::api;
use crate::state::token_store::MemoryTokenStore;
use crate::test_support::{token_expired, user_json};

async fn boot(server: &MockServer, token: Option<&str>) -> (App, Arc<MemoryTokenStore>) {
    let config = ClientConfig::new(&format!("{}/api", server.uri()), std::env::temp_dir()).unwrap();
    let tokens = Arc::new(MemoryTokenStore::new(token));
    let app = App::boot_with(&config, tokens.clone(), Notifier::new()).await.unwrap();
    (app, tokens)
}

async fn mount_current_user(server: &MockServer, admin: bool) {
    Mock::given(method("GET"))
        .and(path("/api/auth/current-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "alice", admin)))
        .mount(server)
        .await;
}

// =============================================================
// Boot
// =============================================================

#[tokio::test]
async fn boot_with_persisted_token_resolves_user_before_navigation() {
    let server = MockServer::start().await;
    mount_current_user(&server, false).await;

    let (mut app, _) = boot(&server, Some("jwt")).await;

    assert!(!app.session().is_loading());
    assert!(app.session().is_logged_in());
    assert_eq!(app.navigate("/"), Ok(Route::Snippets));
    assert_eq!(app.navigate("/login"), Ok(Route::Snippets));
    assert_eq!(app.navigate("/admin"), Ok(Route::Snippets));
    assert_eq!(app.navigate("/profile"), Ok(Route::Profile));
    assert_eq!(app.current_route(), Some(Route::Profile));
}

#[tokio::test]
async fn boot_without_token_lands_on_login() {
    let server = MockServer::start().await;

    let (mut app, _) = boot(&server, None).await;

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(app.navigate("/snippets"), Ok(Route::Login));
    assert_eq!(app.navigate("/admin"), Ok(Route::Login));
    assert_eq!(app.navigate("/login"), Ok(Route::Login));
    assert_eq!(app.current_route(), Some(Route::Login));
}

#[tokio::test]
async fn boot_with_expired_token_forgets_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/current-user"))
        .respond_with(ResponseTemplate::new(403).set_body_json(token_expired()))
        .mount(&server)
        .await;

    let (mut app, tokens) = boot(&server, Some("stale")).await;

    assert_eq!(tokens.get(), None);
    assert_eq!(app.session().token(), None);
    assert_eq!(app.navigate("/tags"), Ok(Route::Login));
}

#[tokio::test]
async fn admin_reaches_admin_route() {
    let server = MockServer::start().await;
    mount_current_user(&server, true).await;

    let (mut app, _) = boot(&server, Some("jwt")).await;

    assert_eq!(app.navigate("/admin"), Ok(Route::Admin));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = MockServer::start().await;
    let (mut app, _) = boot(&server, None).await;

    assert_eq!(app.navigate("/nowhere"), Err(NavigationError::NotFound("/nowhere".to_owned())));
    assert_eq!(app.current_route(), None);
}

// =============================================================
// End to end
// =============================================================

#[tokio::test]
async fn sign_in_then_search_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc",
            "userId": 1,
            "username": "alice",
            "created": [2022, 1, 1, 0, 0, 0],
            "admin": false,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/snippets/search"))
        .and(header("authorization", "Bearer abc"))
        .and(body_json(json!({
            "searchQuery": "",
            "tagIds": null,
            "languageIds": null,
            "pageNumber": 0,
            "pageSize": 20,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalCount": 0, "snippets": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, tokens) = boot(&server, None).await;
    assert_eq!(app.navigate("/snippets"), Ok(Route::Login));

    app.session().sign_in(app.http(), "alice", "pw").await.unwrap();
    assert_eq!(tokens.get().as_deref(), Some("abc"));
    assert_eq!(app.navigate("/login"), Ok(Route::Snippets));

    let page = api::snippet::fetch_paginated_snippets(app.http(), "", None, None, 0, 20).await.unwrap();
    assert_eq!(page.total_count, 0);
}
