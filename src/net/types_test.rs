use serde_json::json;

use super::*;

// =============================================================
// User shapes
// =============================================================

#[test]
fn user_response_maps_user_id_and_admin() {
    let wire: UserResponse = serde_json::from_value(json!({
        "userId": 7,
        "username": "alice",
        "created": [2022, 1, 1, 0, 0, 0],
        "admin": true,
    }))
    .unwrap();
    let user = User::from(wire);
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alice");
    assert!(user.is_admin);
    assert_eq!(user.created.to_string(), "2022-01-01T00:00:00");
}

#[test]
fn user_response_rejects_application_shape() {
    let result = serde_json::from_value::<UserResponse>(json!({
        "id": 7,
        "username": "alice",
        "created": [2022, 1, 1, 0, 0, 0],
        "isAdmin": true,
    }));
    assert!(result.is_err());
}

#[test]
fn register_response_maps_id() {
    let wire: RegisterUserResponse = serde_json::from_value(json!({
        "id": 12,
        "username": "bob",
        "created": [2024, 5, 6, 7, 8, 9],
        "admin": false,
    }))
    .unwrap();
    let user = User::from(wire);
    assert_eq!(user.id, 12);
    assert!(!user.is_admin);
}

#[test]
fn login_response_splits_token_and_user() {
    let wire: LoginResponse = serde_json::from_value(json!({
        "token": "jwt-abc",
        "userId": 3,
        "username": "carol",
        "created": [2023, 12, 31, 23, 59, 59],
        "admin": true,
    }))
    .unwrap();
    let result = LoginResult::from(wire);
    assert_eq!(result.token, "jwt-abc");
    assert_eq!(result.user.id, 3);
    assert!(result.user.is_admin);
    assert_eq!(result.user.created.month_index(), 11);
}

#[test]
fn user_serializes_application_names() {
    let user = User {
        id: 1,
        username: "dave".into(),
        created: crate::net::timestamp::Timestamp::from_parts(&[2022, 1, 1, 0, 0, 0]).unwrap(),
        is_admin: false,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, json!({ "id": 1, "username": "dave", "created": "2022-01-01T00:00:00", "isAdmin": false }));
}

// =============================================================
// Snippet shapes
// =============================================================

#[test]
fn search_result_accepts_extra_fields() {
    let result: SnippetSearchResult = serde_json::from_value(json!({
        "totalCount": 1,
        "extra": "ignored",
        "snippets": [{
            "id": 1,
            "userId": 2,
            "title": "Quicksort",
            "description": "in-place",
            "created": [2022, 1, 1, 0, 0, 0],
            "updated": [2022, 1, 2, 0, 0, 0],
            "relevance": 3,
            "fileCount": 2,
            "languageIds": [1, 4],
            "tagIds": [],
        }],
    }))
    .unwrap();
    assert_eq!(result.total_count, 1);
    assert_eq!(result.snippets[0].language_ids, vec![1, 4]);
    assert!(result.snippets[0].tag_ids.is_empty());
}

#[test]
fn detailed_snippet_requires_tag_ids() {
    let result = serde_json::from_value::<DetailedSnippet>(json!({
        "id": 1,
        "userId": 2,
        "title": "t",
        "description": "d",
        "created": [2022, 1, 1, 0, 0, 0],
        "updated": [2022, 1, 1, 0, 0, 0],
        "relevance": 0,
        "fileCount": 0,
        "languageIds": [],
    }));
    assert!(result.is_err());
}

#[test]
fn snippet_file_decodes_camel_case() {
    let file: SnippetFile = serde_json::from_value(json!({
        "id": 5,
        "snippetId": 1,
        "languageId": 2,
        "filename": "main.rs",
        "content": "fn main() {}",
        "created": [2022, 1, 1, 0, 0, 0],
        "updated": [2022, 1, 1, 0, 0, 0],
    }))
    .unwrap();
    assert_eq!(file.snippet_id, 1);
    assert_eq!(file.filename, "main.rs");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn search_request_sends_null_filters() {
    let body = SearchSnippetsRequest { search_query: "", tag_ids: None, language_ids: None, page_number: 0, page_size: 20 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "searchQuery": "", "tagIds": null, "languageIds": null, "pageNumber": 0, "pageSize": 20 })
    );
}

#[test]
fn search_request_sends_id_filters() {
    let tags = [1, 2];
    let body =
        SearchSnippetsRequest { search_query: "sort", tag_ids: Some(&tags[..]), language_ids: None, page_number: 1, page_size: 10 };
    assert_eq!(serde_json::to_value(&body).unwrap()["tagIds"], json!([1, 2]));
}

#[test]
fn file_requests_keep_backend_spelling() {
    let create = CreateFileRequest { file_name: "a.py", content: "print()", language_id: 3 };
    assert_eq!(
        serde_json::to_value(&create).unwrap(),
        json!({ "fileName": "a.py", "content": "print()", "languageId": 3 })
    );

    let update = UpdateFileRequest { filename: Some("b.py"), ..Default::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "filename": "b.py" }));
}

#[test]
fn update_requests_omit_unset_fields() {
    assert_eq!(serde_json::to_value(UpdateSnippetRequest::default()).unwrap(), json!({}));
    assert_eq!(
        serde_json::to_value(UpdateUserRequest { password: Some("hunter2"), ..Default::default() }).unwrap(),
        json!({ "password": "hunter2" })
    );
    assert_eq!(
        serde_json::to_value(UpdateTagRequest { color: Some("#ff0000"), ..Default::default() }).unwrap(),
        json!({ "color": "#ff0000" })
    );
}
