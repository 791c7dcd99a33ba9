use async_trait::async_trait;

use super::model::{Actor, NewActor};
use crate::common::error::AppResult;
use crate::infrastructure::db::store::PgStore;

#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn insert_actor(&self, new: &NewActor) -> AppResult<Actor>;

    async fn get_actor(&self, id: i64) -> AppResult<Option<Actor>>;

    async fn list_actors(&self) -> AppResult<Vec<Actor>>;

    async fn save_actor(&self, actor: &Actor) -> AppResult<Option<Actor>>;

    async fn delete_actor(&self, id: i64) -> AppResult<bool>;

    async fn existing_actor_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>>;
}

#[async_trait]
impl ActorStore for PgStore {
    async fn insert_actor(&self, new: &NewActor) -> AppResult<Actor> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(actor)
    }

    async fn get_actor(&self, id: i64) -> AppResult<Option<Actor>> {
        let actor = sqlx::query_as::<_, Actor>(
            "SELECT id, first_name, last_name FROM actors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(actor)
    }

    async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(
            "SELECT id, first_name, last_name FROM actors ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(actors)
    }

    async fn save_actor(&self, actor: &Actor) -> AppResult<Option<Actor>> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            UPDATE actors
            SET first_name = $1, last_name = $2
            WHERE id = $3
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&actor.first_name)
        .bind(&actor.last_name)
        .bind(actor.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(actor)
    }

    async fn delete_actor(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn existing_actor_ids(&self, ids: &[i64]) -> AppResult<Vec<i64>> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM actors WHERE id = ANY($1) ORDER BY id ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(found)
    }
}
