use super::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use super::serializer::MovieSerializer;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::serializer::Serializer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List all movies
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    responses(
        (status = 200, description = "List of movies", body = ApiResponse<Vec<MovieResponse>>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> impl IntoResponse {
    match MovieSerializer::new(state.store()).list_all().await {
        Ok(movies) => ApiSuccess(
            ApiResponse::success(movies, "Movies retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Validation failed, e.g. unknown genre or actor id")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieRequest>,
) -> impl IntoResponse {
    match MovieSerializer::new(state.store()).save_new(payload).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieResponse>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match MovieSerializer::new(state.store()).retrieve(id).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace movie
#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateMovieRequest>,
) -> impl IntoResponse {
    let serializer = MovieSerializer::new(state.store());
    match serializer.save_existing(id, UpdateMovieRequest::from(payload)).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update movie
///
/// Genre and actor links are always replaced; omitted lists clear them.
#[utoipa::path(
    patch,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMovieRequest>,
) -> impl IntoResponse {
    match MovieSerializer::new(state.store()).save_existing(id, payload).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete movie
#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = ApiResponse<String>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match MovieSerializer::new(state.store()).destroy(id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Movie deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
