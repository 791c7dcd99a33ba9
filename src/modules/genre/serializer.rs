use async_trait::async_trait;
use tracing::info;

use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::model::{Genre, NewGenre};
use super::repository::duplicate_name;
use crate::common::error::{AppError, AppResult};
use crate::common::serializer::Serializer;
use crate::infrastructure::db::store::Store;

const ENTITY: &str = "Genre";

pub struct GenreSerializer<'a> {
    store: &'a dyn Store,
}

impl<'a> GenreSerializer<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Any stored genre with this name conflicts, the one being updated
    /// included.
    async fn validate_name(&self, name: &str) -> AppResult<()> {
        if self.store.genre_name_exists(name).await? {
            return Err(duplicate_name());
        }
        Ok(())
    }
}

#[async_trait]
impl Serializer for GenreSerializer<'_> {
    type Record = Genre;
    type Create = CreateGenreRequest;
    type Update = UpdateGenreRequest;
    type Output = GenreResponse;

    async fn fetch(&self, id: i64) -> AppResult<Genre> {
        self.store
            .get_genre(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        self.store.list_genres().await
    }

    async fn create(&self, payload: CreateGenreRequest) -> AppResult<Genre> {
        self.validate_name(&payload.name).await?;

        let genre = self
            .store
            .insert_genre(&NewGenre { name: payload.name })
            .await?;
        info!(genre_id = genre.id, "Genre created");
        Ok(genre)
    }

    async fn update(&self, mut instance: Genre, payload: UpdateGenreRequest) -> AppResult<Genre> {
        if let Some(name) = &payload.name {
            self.validate_name(name).await?;
        }
        instance.name = payload.name.unwrap_or(instance.name);

        self.store
            .save_genre(&instance)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, instance.id))
    }

    async fn destroy(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_genre(id).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        info!(genre_id = id, "Genre deleted");
        Ok(())
    }

    async fn to_representation(&self, record: Genre) -> AppResult<GenreResponse> {
        Ok(GenreResponse::from(record))
    }
}
