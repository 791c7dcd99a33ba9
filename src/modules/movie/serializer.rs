use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::info;
use validator::{ValidationError, ValidationErrors};

use super::dto::{CreateMovieRequest, MovieRelations, MovieResponse, UpdateMovieRequest};
use super::model::{Movie, MovieLinks, NewMovie};
use crate::common::error::{AppError, AppResult};
use crate::common::serializer::Serializer;
use crate::infrastructure::db::store::Store;

const ENTITY: &str = "Movie";

fn unique_sorted(ids: &[i64]) -> Vec<i64> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

fn missing_ids_error(requested: &[i64], found: &[i64]) -> Option<ValidationError> {
    let missing: Vec<i64> = requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();
    if missing.is_empty() {
        return None;
    }
    let message = format!("Invalid pk(s) {missing:?} - object does not exist.");
    Some(ValidationError::new("does_not_exist").with_message(message.into()))
}

pub struct MovieSerializer<'a> {
    store: &'a dyn Store,
}

impl<'a> MovieSerializer<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Every referenced genre and actor must exist before anything is
    /// written, so a bad id never leaves a half-linked movie behind.
    async fn resolve(&self, relations: &MovieRelations) -> AppResult<MovieLinks> {
        let genres = unique_sorted(&relations.genres);
        let actors = unique_sorted(&relations.actors);
        let mut errors = ValidationErrors::new();

        if !genres.is_empty() {
            let found = self.store.existing_genre_ids(&genres).await?;
            if let Some(err) = missing_ids_error(&genres, &found) {
                errors.add("genres", err);
            }
        }
        if !actors.is_empty() {
            let found = self.store.existing_actor_ids(&actors).await?;
            if let Some(err) = missing_ids_error(&actors, &found) {
                errors.add("actors", err);
            }
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(MovieLinks { genres, actors })
    }
}

#[async_trait]
impl Serializer for MovieSerializer<'_> {
    type Record = Movie;
    type Create = CreateMovieRequest;
    type Update = UpdateMovieRequest;
    type Output = MovieResponse;

    async fn fetch(&self, id: i64) -> AppResult<Movie> {
        self.store
            .get_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    async fn list(&self) -> AppResult<Vec<Movie>> {
        self.store.list_movies().await
    }

    async fn create(&self, payload: CreateMovieRequest) -> AppResult<Movie> {
        let links = self.resolve(&payload.relations).await?;

        let new = NewMovie {
            title: payload.title,
            description: payload.description,
            duration: payload.duration,
        };
        let movie = self.store.insert_movie(&new, &links).await?;

        info!(
            movie_id = movie.id,
            genres = links.genres.len(),
            actors = links.actors.len(),
            "Movie created"
        );
        Ok(movie)
    }

    async fn update(&self, mut instance: Movie, payload: UpdateMovieRequest) -> AppResult<Movie> {
        let links = self.resolve(&payload.relations).await?;

        instance.title = payload.title.unwrap_or(instance.title);
        instance.description = payload.description.unwrap_or(instance.description);
        instance.duration = payload.duration.unwrap_or(instance.duration);

        self.store
            .save_movie(&instance, &links)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, instance.id))
    }

    async fn destroy(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_movie(id).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    async fn to_representation(&self, record: Movie) -> AppResult<MovieResponse> {
        let genres = self.store.movie_genre_ids(record.id).await?;
        let actors = self.store.movie_actor_ids(record.id).await?;

        Ok(MovieResponse {
            id: record.id,
            title: record.title,
            description: record.description,
            duration: record.duration,
            genres,
            actors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::field_messages;
    use crate::infrastructure::db::memory::MemoryStore;
    use crate::modules::actor::model::NewActor;
    use crate::modules::actor::repository::ActorStore;
    use crate::modules::genre::model::NewGenre;
    use crate::modules::genre::repository::GenreStore;
    use crate::modules::movie::repository::MovieStore;

    /// Three genres (ids 1..=3) and three actors (ids 1..=3).
    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        for name in ["Drama", "Comedy", "Thriller"] {
            store
                .insert_genre(&NewGenre { name: name.to_string() })
                .await
                .unwrap();
        }
        for (first_name, last_name) in [("Al", "Pacino"), ("Robert", "De Niro"), ("Val", "Kilmer")] {
            store
                .insert_actor(&NewActor {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                })
                .await
                .unwrap();
        }
        store
    }

    fn heat(genres: Vec<i64>, actors: Vec<i64>) -> CreateMovieRequest {
        CreateMovieRequest {
            title: "Heat".to_string(),
            description: "A group of professional bank robbers".to_string(),
            duration: 170,
            relations: MovieRelations { genres, actors },
        }
    }

    #[tokio::test]
    async fn create_links_exactly_the_supplied_ids() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);

        let movie = serializer.save_new(heat(vec![1, 2], vec![3])).await.unwrap();

        assert_eq!(movie.genres, vec![1, 2]);
        assert_eq!(movie.actors, vec![3]);
        assert_eq!(store.movie_genre_ids(movie.id).await.unwrap(), vec![1, 2]);
        assert_eq!(store.movie_actor_ids(movie.id).await.unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_to_one_link() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);

        let movie = serializer.save_new(heat(vec![2, 1, 2], vec![])).await.unwrap();

        assert_eq!(movie.genres, vec![1, 2]);
        assert!(movie.actors.is_empty());
    }

    #[tokio::test]
    async fn update_with_empty_genres_clears_links() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);
        let movie = serializer.save_new(heat(vec![1, 2], vec![3])).await.unwrap();

        let update = UpdateMovieRequest {
            relations: MovieRelations {
                genres: vec![],
                actors: vec![3],
            },
            ..Default::default()
        };
        let updated = serializer.save_existing(movie.id, update).await.unwrap();

        assert!(updated.genres.is_empty());
        assert_eq!(updated.actors, vec![3]);
        assert!(store.movie_genre_ids(movie.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_rather_than_merges() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);
        let movie = serializer.save_new(heat(vec![1, 2], vec![1, 2])).await.unwrap();

        let update = UpdateMovieRequest {
            relations: MovieRelations {
                genres: vec![3],
                actors: vec![2, 3],
            },
            ..Default::default()
        };
        let updated = serializer.save_existing(movie.id, update).await.unwrap();

        assert_eq!(updated.genres, vec![3]);
        assert_eq!(updated.actors, vec![2, 3]);
    }

    #[tokio::test]
    async fn update_keeps_scalars_that_were_not_supplied() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);
        let movie = serializer.save_new(heat(vec![1], vec![1])).await.unwrap();

        let update = UpdateMovieRequest {
            duration: Some(171),
            relations: MovieRelations {
                genres: vec![1],
                actors: vec![1],
            },
            ..Default::default()
        };
        let updated = serializer.save_existing(movie.id, update).await.unwrap();

        assert_eq!(updated.title, "Heat");
        assert_eq!(updated.description, movie.description);
        assert_eq!(updated.duration, 171);
    }

    #[tokio::test]
    async fn unknown_ids_fail_validation_without_writing() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);

        let err = serializer.save_new(heat(vec![1, 99], vec![42])).await.unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        let messages = field_messages(&errors);
        assert_eq!(
            messages["genres"],
            vec!["Invalid pk(s) [99] - object does not exist.".to_string()]
        );
        assert!(messages.contains_key("actors"));
        assert!(serializer.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn representation_follows_current_links() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);
        let movie = serializer.save_new(heat(vec![1, 3], vec![2])).await.unwrap();

        let record = store.get_movie(movie.id).await.unwrap().unwrap();
        let links = MovieLinks {
            genres: vec![2],
            actors: vec![2],
        };
        store.save_movie(&record, &links).await.unwrap();
        let actor_deleted = store.delete_actor(2).await.unwrap();

        let current = serializer.retrieve(movie.id).await.unwrap();
        assert!(actor_deleted);
        assert_eq!(current.genres, vec![2]);
        assert!(current.actors.is_empty());
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let store = seeded_store().await;
        let serializer = MovieSerializer::new(&store);
        let mut payload = heat(vec![], vec![]);
        payload.title = String::new();

        let err = serializer.save_new(payload).await.unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(field_messages(&errors).contains_key("title"));
    }
}
