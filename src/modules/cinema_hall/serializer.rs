use async_trait::async_trait;
use tracing::info;

use super::dto::{CinemaHallResponse, CreateCinemaHallRequest, UpdateCinemaHallRequest};
use super::model::{CinemaHall, NewCinemaHall};
use crate::common::error::{AppError, AppResult};
use crate::common::serializer::Serializer;
use crate::infrastructure::db::store::Store;

const ENTITY: &str = "CinemaHall";

pub struct CinemaHallSerializer<'a> {
    store: &'a dyn Store,
}

impl<'a> CinemaHallSerializer<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Serializer for CinemaHallSerializer<'_> {
    type Record = CinemaHall;
    type Create = CreateCinemaHallRequest;
    type Update = UpdateCinemaHallRequest;
    type Output = CinemaHallResponse;

    async fn fetch(&self, id: i64) -> AppResult<CinemaHall> {
        self.store
            .get_cinema_hall(id)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    async fn list(&self) -> AppResult<Vec<CinemaHall>> {
        self.store.list_cinema_halls().await
    }

    async fn create(&self, payload: CreateCinemaHallRequest) -> AppResult<CinemaHall> {
        let hall = self
            .store
            .insert_cinema_hall(&NewCinemaHall {
                name: payload.name,
                rows: payload.rows,
                seats_in_row: payload.seats_in_row,
            })
            .await?;
        info!(cinema_hall_id = hall.id, "Cinema hall created");
        Ok(hall)
    }

    async fn update(
        &self,
        mut instance: CinemaHall,
        payload: UpdateCinemaHallRequest,
    ) -> AppResult<CinemaHall> {
        instance.name = payload.name.unwrap_or(instance.name);
        instance.rows = payload.rows.unwrap_or(instance.rows);
        instance.seats_in_row = payload.seats_in_row.unwrap_or(instance.seats_in_row);

        self.store
            .save_cinema_hall(&instance)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, instance.id))
    }

    async fn destroy(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_cinema_hall(id).await? {
            return Err(AppError::not_found(ENTITY, id));
        }
        info!(cinema_hall_id = id, "Cinema hall deleted");
        Ok(())
    }

    async fn to_representation(&self, record: CinemaHall) -> AppResult<CinemaHallResponse> {
        Ok(CinemaHallResponse::from(record))
    }
}
