use super::dto::{CreateCinemaHallRequest, CinemaHallResponse, UpdateCinemaHallRequest};
use super::serializer::CinemaHallSerializer;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::serializer::Serializer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List all cinema halls
#[utoipa::path(
    get,
    path = "/api/v1/cinema_halls",
    responses(
        (status = 200, description = "List of cinema halls", body = ApiResponse<Vec<CinemaHallResponse>>)
    ),
    tag = "Cinema halls"
)]
pub async fn list_cinema_halls(State(state): State<AppState>) -> impl IntoResponse {
    match CinemaHallSerializer::new(state.store()).list_all().await {
        Ok(halls) => ApiSuccess(
            ApiResponse::success(halls, "Cinema halls retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new cinema hall
#[utoipa::path(
    post,
    path = "/api/v1/cinema_halls",
    request_body = CreateCinemaHallRequest,
    responses(
        (status = 201, description = "Cinema hall created", body = ApiResponse<CinemaHallResponse>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Cinema halls"
)]
pub async fn create_cinema_hall(
    State(state): State<AppState>,
    Json(payload): Json<CreateCinemaHallRequest>,
) -> impl IntoResponse {
    match CinemaHallSerializer::new(state.store()).save_new(payload).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get cinema hall by ID
#[utoipa::path(
    get,
    path = "/api/v1/cinema_halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Cinema hall details", body = ApiResponse<CinemaHallResponse>),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn get_cinema_hall(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match CinemaHallSerializer::new(state.store()).retrieve(id).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace cinema hall
#[utoipa::path(
    put,
    path = "/api/v1/cinema_halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    request_body = CreateCinemaHallRequest,
    responses(
        (status = 200, description = "Cinema hall updated", body = ApiResponse<CinemaHallResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn update_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCinemaHallRequest>,
) -> impl IntoResponse {
    let serializer = CinemaHallSerializer::new(state.store());
    match serializer.save_existing(id, UpdateCinemaHallRequest::from(payload)).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update cinema hall
#[utoipa::path(
    patch,
    path = "/api/v1/cinema_halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    request_body = UpdateCinemaHallRequest,
    responses(
        (status = 200, description = "Cinema hall updated", body = ApiResponse<CinemaHallResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn patch_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCinemaHallRequest>,
) -> impl IntoResponse {
    match CinemaHallSerializer::new(state.store()).save_existing(id, payload).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete cinema hall
#[utoipa::path(
    delete,
    path = "/api/v1/cinema_halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Cinema hall deleted", body = ApiResponse<String>),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn delete_cinema_hall(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match CinemaHallSerializer::new(state.store()).destroy(id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Cinema hall deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
