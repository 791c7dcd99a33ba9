//! Integration tests for movie API handlers
mod common;

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{build_test_app, create, delete, get, patch, post, put};

/// Genres 1 and 2, actors 1..=3.
async fn seed(app: &Router) {
    for name in ["Drama", "Crime"] {
        create(app, "/api/v1/genres", json!({ "name": name })).await;
    }
    for (first, last) in [("Al", "Pacino"), ("Robert", "De Niro"), ("Val", "Kilmer")] {
        create(app, "/api/v1/actors", json!({ "first_name": first, "last_name": last })).await;
    }
}

fn heat(genres: Value, actors: Value) -> Value {
    json!({
        "title": "Heat",
        "description": "A group of professional bank robbers",
        "duration": 170,
        "genres": genres,
        "actors": actors,
    })
}

#[tokio::test]
async fn test_create_movie_links_relations() {
    let app = build_test_app();
    seed(&app).await;

    let (status, json) = post(&app, "/api/v1/movies", heat(json!([1, 2]), json!([3]))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json["data"],
        json!({
            "id": 1,
            "title": "Heat",
            "description": "A group of professional bank robbers",
            "duration": 170,
            "genres": [1, 2],
            "actors": [3],
        })
    );
}

#[tokio::test]
async fn test_create_movie_without_relation_lists() {
    let app = build_test_app();

    let (status, json) = post(
        &app,
        "/api/v1/movies",
        json!({ "title": "Heat", "description": "Crime", "duration": 170 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["genres"], json!([]));
    assert_eq!(json["data"]["actors"], json!([]));
}

#[tokio::test]
async fn test_put_with_empty_genres_clears_them() {
    let app = build_test_app();
    seed(&app).await;
    let id = create(&app, "/api/v1/movies", heat(json!([1, 2]), json!([1, 2]))).await;

    let (status, json) = put(&app, &format!("/api/v1/movies/{id}"), heat(json!([]), json!([2]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["genres"], json!([]));
    assert_eq!(json["data"]["actors"], json!([2]));

    let (_, json) = get(&app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(json["data"]["genres"], json!([]));
}

#[tokio::test]
async fn test_patch_keeps_scalars_and_replaces_links() {
    let app = build_test_app();
    seed(&app).await;
    let id = create(&app, "/api/v1/movies", heat(json!([1]), json!([1, 2]))).await;

    let (status, json) = patch(
        &app,
        &format!("/api/v1/movies/{id}"),
        json!({ "duration": 171, "genres": [2] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Heat");
    assert_eq!(json["data"]["duration"], 171);
    assert_eq!(json["data"]["genres"], json!([2]));
    assert_eq!(json["data"]["actors"], json!([]));
}

#[tokio::test]
async fn test_unknown_genre_id_is_rejected() {
    let app = build_test_app();
    seed(&app).await;

    let (status, json) = post(&app, "/api/v1/movies", heat(json!([7]), json!([]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["data"]["genres"][0], "Invalid pk(s) [7] - object does not exist.");

    let (_, list) = get(&app, "/api/v1/movies").await;
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn test_deleted_genre_drops_out_of_movie() {
    let app = build_test_app();
    seed(&app).await;
    let id = create(&app, "/api/v1/movies", heat(json!([1, 2]), json!([]))).await;

    let (status, _) = delete(&app, "/api/v1/genres/1").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(json["data"]["genres"], json!([2]));
}

#[tokio::test]
async fn test_health_check() {
    let app = build_test_app();

    let (status, _) = get(&app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
}
