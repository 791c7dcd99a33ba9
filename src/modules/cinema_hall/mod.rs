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
        .route("/", get(handler::list_cinema_halls).post(handler::create_cinema_hall))
        .route(
            "/{id}",
            get(handler::get_cinema_hall)
                .put(handler::update_cinema_hall)
                .patch(handler::patch_cinema_hall)
                .delete(handler::delete_cinema_hall),
        )
}
