use super::state::AppState;
use crate::error::WorkoutError;
use crate::workouts::{AddWorkoutRequest, CategorizedEntry, Category, CategoryLog, WorkoutEntry};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json},
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

const UI_PAGE: &str = include_str!("../../static/index.html");

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AddWorkoutResponse {
    pub message: String,
    pub entry: WorkoutEntry,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct ListWorkoutsResponse {
    pub workouts: Vec<CategorizedEntry>,
    pub count: usize,
    pub by_category: CategoryLog,
}

/// True for `application/json` and `application/*+json`, ignoring case and parameters
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };

    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json")
            || subtype.to_ascii_lowercase().ends_with("+json"))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Service info and endpoint list
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "ACEestFitness API is running",
            "docs": ["/health", "/workouts", "/summary"],
        })),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// POST /workouts
/// Validate and record a workout
pub async fn add_workout(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WorkoutError> {
    if !is_json_content_type(&headers) {
        warn!("Rejected workout: {}", WorkoutError::UnsupportedMediaType);
        return Err(WorkoutError::UnsupportedMediaType);
    }

    let new = AddWorkoutRequest::from_json_bytes(&body)
        .validate()
        .inspect_err(|e| warn!("Rejected workout: {}", e))?;

    let category = new.category;
    let entry = state.store.record(new, Local::now().naive_local()).await;

    Ok((
        StatusCode::CREATED,
        Json(AddWorkoutResponse {
            message: "Workout added".to_string(),
            entry,
            category,
        }),
    ))
}

/// GET /workouts
/// All entries, flattened and grouped by category
pub async fn list_workouts(State(state): State<AppState>) -> impl IntoResponse {
    let by_category = state.store.snapshot().await;
    let workouts = by_category.flatten();

    (
        StatusCode::OK,
        Json(ListWorkoutsResponse {
            count: workouts.len(),
            workouts,
            by_category,
        }),
    )
}

/// GET /summary
/// Total minutes across all categories with a motivational message
pub async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.store.summary().await))
}

/// GET /ui
/// Browser front end for the JSON API
pub async fn ui() -> impl IntoResponse {
    Html(UI_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers("application/json")));
        assert!(is_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers("Application/JSON")));
        assert!(is_json_content_type(&headers("application/vnd.api+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers("text/plain")));
        assert!(!is_json_content_type(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&headers("text/json")));
        assert!(!is_json_content_type(&headers("application/jsonp")));
    }
}
