use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serializer::not_blank;

/// Genre and actor ids sent beside the movie's own fields.
///
/// They are not validated field by field; the serializer resolves them
/// against stored records and replaces the movie's links with exactly
/// these sets. A missing list means "no links".
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct MovieRelations {
    #[serde(default)]
    pub genres: Vec<i64>,
    #[serde(default)]
    pub actors: Vec<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub duration: i32,
    #[serde(flatten)]
    pub relations: MovieRelations,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    pub duration: Option<i32>,
    #[serde(flatten)]
    pub relations: MovieRelations,
}

impl From<CreateMovieRequest> for UpdateMovieRequest {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: Some(req.title),
            description: Some(req.description),
            duration: Some(req.duration),
            relations: req.relations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<i64>,
    pub actors: Vec<i64>,
}
