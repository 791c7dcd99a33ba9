use async_trait::async_trait;

use super::model::{Genre, NewGenre};
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::store::PgStore;

pub const DUPLICATE_NAME: &str = "Genre with this name already exists";

pub fn duplicate_name() -> AppError {
    AppError::invalid_field("name", "unique", DUPLICATE_NAME)
}

/// `genres.name` carries a unique index; a race past the serializer's
/// pre-check still ends up as a validation failure.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => duplicate_name(),
        _ => AppError::Database(err),
    }
}

#[async_trait]
pub trait GenreStore: Send + Sync {
    async fn insert_genre(&self, new: &NewGenre) -> AppResult<Genre>;

    async fn get_genre(&self, id: i64) -> AppResult<Option<Genre>>;

    async fn list_genres(&self) -> AppResult<Vec<Genre>>;

    /// Writes every column of `genre`; `None` when the row no longer exists.
    async fn save_genre(&self, genre: &Genre) -> AppResult<Option<Genre>>;

    async fn delete_genre(&self, id: i64) -> AppResult<bool>;

    async fn genre_name_exists(&self, name: &str) -> AppResult<bool>;

    /// The subset of `ids` that name stored genres, ascending and deduplicated.
    async fn existing_genre_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>>;
}

#[async_trait]
impl GenreStore for PgStore {
    async fn insert_genre(&self, new: &NewGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&new.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)
    }

    async fn get_genre(&self, id: i64) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(genre)
    }

    async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(genres)
    }

    async fn save_genre(&self, genre: &Genre) -> AppResult<Option<Genre>> {
        sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(&genre.name)
        .bind(genre.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)
    }

    async fn delete_genre(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn genre_name_exists(&self, name: &str) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM genres WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn existing_genre_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM genres WHERE id = ANY($1) ORDER BY id ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(found)
    }
}
