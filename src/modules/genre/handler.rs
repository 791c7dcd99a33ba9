use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::serializer::GenreSerializer;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::serializer::Serializer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreResponse>>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreSerializer::new(state.store()).list_all().await {
        Ok(genres) => ApiSuccess(
            ApiResponse::success(genres, "Genres retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Validation failed, e.g. duplicate name")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreRequest>,
) -> impl IntoResponse {
    match GenreSerializer::new(state.store()).save_new(payload).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = ApiResponse<GenreResponse>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match GenreSerializer::new(state.store()).retrieve(id).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace genre
#[utoipa::path(
    put,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateGenreRequest>,
) -> impl IntoResponse {
    let serializer = GenreSerializer::new(state.store());
    match serializer.save_existing(id, UpdateGenreRequest::from(payload)).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update genre
#[utoipa::path(
    patch,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn patch_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGenreRequest>,
) -> impl IntoResponse {
    match GenreSerializer::new(state.store()).save_existing(id, payload).await {
        Ok(genre) => ApiSuccess(
            ApiResponse::success(genre, "Genre updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = ApiResponse<String>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match GenreSerializer::new(state.store()).destroy(id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Genre deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
