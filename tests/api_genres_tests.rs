//! Integration tests for genre API handlers
mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, create, delete, get, patch, post, put};

#[tokio::test]
async fn test_create_genre_returns_created() {
    let app = build_test_app();

    let (status, json) = post(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"], json!({ "id": 1, "name": "Drama" }));
}

#[tokio::test]
async fn test_create_duplicate_genre_fails_validation() {
    let app = build_test_app();
    create(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    let (status, json) = post(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["data"]["name"][0], "Genre with this name already exists");

    let (_, list) = get(&app, "/api/v1/genres").await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_put_requires_name() {
    let app = build_test_app();
    let id = create(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    let (status, _) = put(&app, &format!("/api/v1/genres/{id}"), json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_patch_renames_genre() {
    let app = build_test_app();
    let id = create(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    let (status, json) = patch(&app, &format!("/api/v1/genres/{id}"), json!({ "name": "Noir" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Noir");
}

#[tokio::test]
async fn test_get_missing_genre_returns_not_found() {
    let app = build_test_app();

    let (status, json) = get(&app, "/api/v1/genres/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Genre with id 42 not found");
}

#[tokio::test]
async fn test_delete_genre() {
    let app = build_test_app();
    let id = create(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    let (status, _) = delete(&app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_with_own_name_fails_validation() {
    let app = build_test_app();
    let id = create(&app, "/api/v1/genres", json!({ "name": "Drama" })).await;

    let (status, json) = put(&app, &format!("/api/v1/genres/{id}"), json!({ "name": "Drama" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["data"]["name"][0], "Genre with this name already exists");
}
