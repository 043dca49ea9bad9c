//! Shared fixtures for tests that talk to a mock backend.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::notify::Notifier;
use crate::state::session::SessionStore;
use crate::state::token_store::MemoryTokenStore;

pub struct Harness {
    pub server: MockServer,
    pub tokens: Arc<MemoryTokenStore>,
    pub notifier: Notifier,
    pub session: Arc<SessionStore>,
    pub http: HttpClient,
}

/// Mock server plus a session booted with `token` already persisted.
pub async fn harness(token: Option<&str>) -> Harness {
    let server = MockServer::start().await;
    let config = ClientConfig::new(&format!("{}/api", server.uri()), std::env::temp_dir()).unwrap();
    let tokens = Arc::new(MemoryTokenStore::new(token));
    let notifier = Notifier::new();
    let session = Arc::new(SessionStore::new(tokens.clone(), notifier.clone()));
    let http = HttpClient::new(&config, Arc::clone(&session)).unwrap();
    Harness { server, tokens, notifier, session, http }
}

pub fn user_json(id: i64, username: &str, admin: bool) -> Value {
    json!({ "userId": id, "username": username, "created": [2022, 1, 1, 0, 0, 0], "admin": admin })
}

pub fn tag_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "userId": 1, "name": name, "color": "#336699", "created": [2023, 4, 5, 6, 7, 8] })
}

pub fn snippet_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "title": title,
        "description": "desc",
        "created": [2023, 1, 1, 12, 0, 0],
        "updated": [2023, 1, 2, 12, 0, 0],
    })
}

pub fn file_json(id: i64, snippet_id: i64, filename: &str) -> Value {
    json!({
        "id": id,
        "snippetId": snippet_id,
        "languageId": 1,
        "filename": filename,
        "content": "fn main() {}",
        "created": [2023, 1, 1, 12, 0, 0],
        "updated": [2023, 1, 1, 12, 0, 0],
    })
}

pub fn token_expired() -> Value {
    json!({ "error": "Token expired" })
}
