use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::serializer::not_blank;
use crate::modules::actor::model::Actor;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateActorRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub last_name: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateActorRequest {
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "not_blank")
    )]
    pub last_name: Option<String>,
}

impl From<CreateActorRequest> for UpdateActorRequest {
    fn from(req: CreateActorRequest) -> Self {
        Self {
            first_name: Some(req.first_name),
            last_name: Some(req.last_name),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Actor> for ActorResponse {
    fn from(a: Actor) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
        }
    }
}
