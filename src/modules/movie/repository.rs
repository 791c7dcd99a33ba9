use async_trait::async_trait;

use sqlx::PgConnection;

use super::model::{Movie, MovieLinks, NewMovie};
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::pool::DbPool;
use crate::infrastructure::db::store::PgStore;

/// A link points at a genre or actor that is not stored (any more).
pub fn unknown_link(field: &'static str) -> AppError {
    AppError::invalid_field(field, "does_not_exist", "Invalid pk - object does not exist.")
}

fn map_link_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            match db_err.constraint() {
                Some(c) if c.contains("genre_id") => return unknown_link("genres"),
                Some(c) if c.contains("actor_id") => return unknown_link("actors"),
                _ => {}
            }
        }
    }
    AppError::Database(err)
}

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Inserts the movie and its links in one transaction.
    async fn insert_movie(&self, new: &NewMovie, links: &MovieLinks) -> AppResult<Movie>;

    async fn get_movie(&self, id: i64) -> AppResult<Option<Movie>>;

    async fn list_movies(&self) -> AppResult<Vec<Movie>>;

    /// Writes every column and replaces both link sets in one transaction;
    /// `None` when the row no longer exists.
    async fn save_movie(&self, movie: &Movie, links: &MovieLinks) -> AppResult<Option<Movie>>;

    async fn delete_movie(&self, id: i64) -> AppResult<bool>;

    async fn movie_genre_ids(&self, movie_id: i64) -> AppResult<Vec<i64>>;

    async fn movie_actor_ids(&self, movie_id: i64) -> AppResult<Vec<i64>>;
}

/// Join tables between movies and the records they link to.
#[derive(Clone, Copy)]
enum Link {
    Genres,
    Actors,
}

impl Link {
    fn table(self) -> &'static str {
        match self {
            Link::Genres => "movie_genres",
            Link::Actors => "movie_actors",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Link::Genres => "genre_id",
            Link::Actors => "actor_id",
        }
    }
}

async fn replace_links(
    conn: &mut PgConnection,
    link: Link,
    movie_id: i64,
    ids: &[i64],
) -> AppResult<()> {
    sqlx::query(&format!("DELETE FROM {} WHERE movie_id = $1", link.table()))
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;

    if !ids.is_empty() {
        sqlx::query(&format!(
            r#"
            INSERT INTO {} (movie_id, {})
            SELECT $1, unnest($2::bigint[])
            ON CONFLICT DO NOTHING
            "#,
            link.table(),
            link.column()
        ))
        .bind(movie_id)
        .bind(ids)
        .execute(&mut *conn)
        .await
        .map_err(map_link_violation)?;
    }

    Ok(())
}

async fn replace_all_links(
    conn: &mut PgConnection,
    movie_id: i64,
    links: &MovieLinks,
) -> AppResult<()> {
    replace_links(conn, Link::Genres, movie_id, &links.genres).await?;
    replace_links(conn, Link::Actors, movie_id, &links.actors).await
}

async fn linked_ids(pool: &DbPool, link: Link, movie_id: i64) -> AppResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(&format!(
        "SELECT {} FROM {} WHERE movie_id = $1 ORDER BY 1 ASC",
        link.column(),
        link.table()
    ))
    .bind(movie_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

#[async_trait]
impl MovieStore for PgStore {
    async fn insert_movie(&self, new: &NewMovie, links: &MovieLinks) -> AppResult<Movie> {
        let mut tx = self.pool.begin().await?;

        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, description, duration)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, duration
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.duration)
        .fetch_one(&mut *tx)
        .await?;
        replace_all_links(&mut *tx, movie.id, links).await?;

        tx.commit().await?;
        Ok(movie)
    }

    async fn get_movie(&self, id: i64) -> AppResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, duration FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, duration FROM movies ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn save_movie(&self, movie: &Movie, links: &MovieLinks) -> AppResult<Option<Movie>> {
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = $1, description = $2, duration = $3
            WHERE id = $4
            RETURNING id, title, description, duration
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(movie.duration)
        .bind(movie.id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(saved) = saved else {
            return Ok(None);
        };
        replace_all_links(&mut *tx, saved.id, links).await?;

        tx.commit().await?;
        Ok(Some(saved))
    }

    async fn delete_movie(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn movie_genre_ids(&self, movie_id: i64) -> AppResult<Vec<i64>> {
        linked_ids(&self.pool, Link::Genres, movie_id).await
    }

    async fn movie_actor_ids(&self, movie_id: i64) -> AppResult<Vec<i64>> {
        linked_ids(&self.pool, Link::Actors, movie_id).await
    }
}
