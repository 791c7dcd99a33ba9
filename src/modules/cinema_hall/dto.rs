use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serializer::not_blank;
use crate::modules::cinema_hall::model::CinemaHall;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCinemaHallRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCinemaHallRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
}

impl From<CreateCinemaHallRequest> for UpdateCinemaHallRequest {
    fn from(req: CreateCinemaHallRequest) -> Self {
        Self {
            name: Some(req.name),
            rows: Some(req.rows),
            seats_in_row: Some(req.seats_in_row),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CinemaHallResponse {
    pub id: i64,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl From<CinemaHall> for CinemaHallResponse {
    fn from(h: CinemaHall) -> Self {
        Self {
            id: h.id,
            name: h.name,
            rows: h.rows,
            seats_in_row: h.seats_in_row,
        }
    }
}
