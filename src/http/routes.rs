use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Optional middleware for the router
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    create_router_with(state, RouterOptions::default())
}

pub fn create_router_with(state: AppState, options: RouterOptions) -> Router {
    let router = Router::new()
        // Service info
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Workouts
        .route(
            "/workouts",
            get(handlers::list_workouts).post(handlers::add_workout),
        )
        .route("/summary", get(handlers::get_summary))
        // Browser UI
        .route("/ui", get(handlers::ui));

    let router = if options.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
