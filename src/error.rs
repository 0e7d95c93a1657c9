//! Request-level errors for the workout API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Reasons an add-workout request is rejected. None of them mutate the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkoutError {
    #[error("Expected application/json")]
    UnsupportedMediaType,

    #[error("Invalid category. Must be: Warm-up, Workout, or Cool-down")]
    InvalidCategory,

    #[error("Field 'workout' is required")]
    MissingField,

    #[error("Field 'duration' must be a positive integer (minutes)")]
    InvalidDuration,
}

impl WorkoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkoutError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            WorkoutError::InvalidCategory
            | WorkoutError::MissingField
            | WorkoutError::InvalidDuration => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
