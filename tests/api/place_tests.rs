//! Place API Tests
//!
//! Shape validation and path parsing run before any storage access, so
//! these rejections are exercised end-to-end without a database.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{response_json, TestApp};

#[tokio::test]
async fn test_create_place_with_empty_title_is_422() {
    let app = TestApp::new();
    let body = json!({
        "title": "",
        "description": "A famous Paris landmark",
        "address": "Champ de Mars, Paris",
        "creator": "42"
    });

    let response = app.post_json("/places", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid inputs passed, please verify your data");
}

#[tokio::test]
async fn test_create_place_with_short_description_is_422() {
    let app = TestApp::new();
    let body = json!({
        "title": "Eiffel Tower",
        "description": "Upd",
        "address": "Champ de Mars, Paris",
        "creator": "42"
    });

    let response = app.post_json("/places", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_place_with_empty_address_is_422() {
    let app = TestApp::new();
    let body = json!({
        "title": "Eiffel Tower",
        "description": "A famous Paris landmark",
        "address": "",
        "creator": "42"
    });

    let response = app.post_json("/places", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_place_with_malformed_creator_id_is_400() {
    let app = TestApp::new();
    let body = json!({
        "title": "Eiffel Tower",
        "description": "A famous Paris landmark",
        "address": "Champ de Mars, Paris",
        "creator": "not-an-id"
    });

    let response = app.post_json("/places", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_place_with_short_description_is_400() {
    let app = TestApp::new();
    let body = json!({
        "title": "Eiffel Tower Updated",
        "description": "Upd"
    });

    let response = app.patch_json("/places/123", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid inputs passed, please verify your data");
}

#[tokio::test]
async fn test_get_place_with_malformed_id_is_400() {
    let app = TestApp::new();

    let response = app.get("/places/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_place_with_malformed_id_is_400() {
    let app = TestApp::new();

    let response = app.delete("/places/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_places_for_user_with_malformed_id_is_400() {
    let app = TestApp::new();

    let response = app.get("/places/user/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
