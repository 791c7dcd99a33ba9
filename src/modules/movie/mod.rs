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
        .route("/", get(handler::list_movies).post(handler::create_movie))
        .route(
            "/{id}",
            get(handler::get_movie)
                .put(handler::update_movie)
                .patch(handler::patch_movie)
                .delete(handler::delete_movie),
        )
}
