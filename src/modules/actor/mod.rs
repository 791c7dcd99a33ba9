use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod serializer;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_actors).post(handler::create_actor))
        .route(
            "/{id}",
            get(handler::get_actor)
                .put(handler::update_actor)
                .patch(handler::patch_actor)
                .delete(handler::delete_actor),
        )
}
