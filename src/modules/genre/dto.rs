use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serializer::not_blank;
use crate::modules::genre::model::Genre;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGenreRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
}

impl From<CreateGenreRequest> for UpdateGenreRequest {
    fn from(req: CreateGenreRequest) -> Self {
        Self {
            name: Some(req.name),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}
