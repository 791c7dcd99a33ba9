use utoipa::OpenApi;

use crate::modules::actor::dto::{ActorResponse, CreateActorRequest, UpdateActorRequest};
use crate::modules::cinema_hall::dto::{
    CinemaHallResponse, CreateCinemaHallRequest, UpdateCinemaHallRequest,
};
use crate::modules::genre::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use crate::modules::movie::dto::{
    CreateMovieRequest, MovieRelations, MovieResponse, UpdateMovieRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::patch_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::actor::handler::list_actors,
        crate::modules::actor::handler::create_actor,
        crate::modules::actor::handler::get_actor,
        crate::modules::actor::handler::update_actor,
        crate::modules::actor::handler::patch_actor,
        crate::modules::actor::handler::delete_actor,
        crate::modules::cinema_hall::handler::list_cinema_halls,
        crate::modules::cinema_hall::handler::create_cinema_hall,
        crate::modules::cinema_hall::handler::get_cinema_hall,
        crate::modules::cinema_hall::handler::update_cinema_hall,
        crate::modules::cinema_hall::handler::patch_cinema_hall,
        crate::modules::cinema_hall::handler::delete_cinema_hall,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::patch_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            CreateGenreRequest, UpdateGenreRequest, GenreResponse,
            CreateActorRequest, UpdateActorRequest, ActorResponse,
            CreateCinemaHallRequest, UpdateCinemaHallRequest, CinemaHallResponse,
            CreateMovieRequest, UpdateMovieRequest, MovieRelations, MovieResponse,
        )
    ),
    tags(
        (name = "Genres", description = "Movie genres, unique by name"),
        (name = "Actors", description = "Actors appearing in movies"),
        (name = "Cinema halls", description = "Halls and their seating layout"),
        (name = "Movies", description = "Movies with their genre and actor links")
    )
)]
pub struct ApiDoc;
