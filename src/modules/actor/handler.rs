use super::dto::{CreateActorRequest, ActorResponse, UpdateActorRequest};
use super::serializer::ActorSerializer;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::serializer::Serializer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List all actors
#[utoipa::path(
    get,
    path = "/api/v1/actors",
    responses(
        (status = 200, description = "List of actors", body = ApiResponse<Vec<ActorResponse>>)
    ),
    tag = "Actors"
)]
pub async fn list_actors(State(state): State<AppState>) -> impl IntoResponse {
    match ActorSerializer::new(state.store()).list_all().await {
        Ok(actors) => ApiSuccess(
            ApiResponse::success(actors, "Actors retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new actor
#[utoipa::path(
    post,
    path = "/api/v1/actors",
    request_body = CreateActorRequest,
    responses(
        (status = 201, description = "Actor created", body = ApiResponse<ActorResponse>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Actors"
)]
pub async fn create_actor(
    State(state): State<AppState>,
    Json(payload): Json<CreateActorRequest>,
) -> impl IntoResponse {
    match ActorSerializer::new(state.store()).save_new(payload).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get actor by ID
#[utoipa::path(
    get,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = ApiResponse<ActorResponse>),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn get_actor(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match ActorSerializer::new(state.store()).retrieve(id).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace actor
#[utoipa::path(
    put,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = CreateActorRequest,
    responses(
        (status = 200, description = "Actor updated", body = ApiResponse<ActorResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateActorRequest>,
) -> impl IntoResponse {
    let serializer = ActorSerializer::new(state.store());
    match serializer.save_existing(id, UpdateActorRequest::from(payload)).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update actor
#[utoipa::path(
    patch,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = UpdateActorRequest,
    responses(
        (status = 200, description = "Actor updated", body = ApiResponse<ActorResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn patch_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateActorRequest>,
) -> impl IntoResponse {
    match ActorSerializer::new(state.store()).save_existing(id, payload).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete actor
#[utoipa::path(
    delete,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor deleted", body = ApiResponse<String>),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn delete_actor(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match ActorSerializer::new(state.store()).destroy(id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Actor deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
