use async_trait::async_trait;

use super::model::{CinemaHall, NewCinemaHall};
use crate::common::error::AppResult;
use crate::infrastructure::db::store::PgStore;

#[async_trait]
pub trait CinemaHallStore: Send + Sync {
    async fn insert_cinema_hall(&self, new: &NewCinemaHall) -> AppResult<CinemaHall>;

    async fn get_cinema_hall(&self, id: i64) -> AppResult<Option<CinemaHall>>;

    async fn list_cinema_halls(&self) -> AppResult<Vec<CinemaHall>>;

    async fn save_cinema_hall(&self, hall: &CinemaHall) -> AppResult<Option<CinemaHall>>;

    async fn delete_cinema_hall(&self, id: i64) -> AppResult<bool>;
}

#[async_trait]
impl CinemaHallStore for PgStore {
    async fn insert_cinema_hall(&self, new: &NewCinemaHall) -> AppResult<CinemaHall> {
        let hall = sqlx::query_as::<_, CinemaHall>(
            r#"
            INSERT INTO cinema_halls (name, rows, seats_in_row)
            VALUES ($1, $2, $3)
            RETURNING id, name, rows, seats_in_row
            "#,
        )
        .bind(&new.name)
        .bind(new.rows)
        .bind(new.seats_in_row)
        .fetch_one(&self.pool)
        .await?;
        Ok(hall)
    }

    async fn get_cinema_hall(&self, id: i64) -> AppResult<Option<CinemaHall>> {
        let hall = sqlx::query_as::<_, CinemaHall>(
            "SELECT id, name, rows, seats_in_row FROM cinema_halls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hall)
    }

    async fn list_cinema_halls(&self) -> AppResult<Vec<CinemaHall>> {
        let halls = sqlx::query_as::<_, CinemaHall>(
            "SELECT id, name, rows, seats_in_row FROM cinema_halls ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(halls)
    }

    async fn save_cinema_hall(&self, hall: &CinemaHall) -> AppResult<Option<CinemaHall>> {
        let hall = sqlx::query_as::<_, CinemaHall>(
            r#"
            UPDATE cinema_halls
            SET name = $1, rows = $2, seats_in_row = $3
            WHERE id = $4
            RETURNING id, name, rows, seats_in_row
            "#,
        )
        .bind(&hall.name)
        .bind(hall.rows)
        .bind(hall.seats_in_row)
        .bind(hall.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hall)
    }

    async fn delete_cinema_hall(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cinema_halls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
