use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use validator::{ValidationError, ValidationErrors};

use crate::common::response::{ApiError, ApiResponse};

/// Errors raised by serializers and stores.
///
/// Every variant maps onto one HTTP status; validation failures keep their
/// per-field messages so clients can show them next to the offending input.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Single-field validation failure.
    pub fn invalid_field(
        field: &'static str,
        code: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new(code).with_message(message.into()));
        AppError::Validation(errors)
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Flattens `ValidationErrors` into `field -> [message]`, falling back to the
/// error code when a validator carries no message.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(errors) => {
                let response = ApiResponse::failure(field_messages(&errors), "Validation failed");
                (status, Json(response)).into_response()
            }
            AppError::NotFound { .. } => ApiError(self.to_string(), status).into_response(),
            AppError::Database(err) => {
                error!(error = %err, "Database error");
                ApiError("An internal error occurred".to_string(), status).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_keeps_message() {
        let err = AppError::invalid_field("name", "unique", "Genre with this name already exists");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let messages = field_messages(&errors);
        assert_eq!(
            messages.get("name"),
            Some(&vec!["Genre with this name already exists".to_string()])
        );
    }

    #[test]
    fn message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("rows", ValidationError::new("range"));
        let messages = field_messages(&errors);
        assert_eq!(messages["rows"], vec!["range".to_string()]);
    }

    #[test]
    fn not_found_names_entity() {
        let err = AppError::not_found("Actor", 7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Actor with id 7 not found");
    }
}
