//! HTTP API for recording and summarizing workouts
//!
//! - GET / - Service info and endpoint list
//! - GET /health - Health check
//! - POST /workouts - Record a workout
//! - GET /workouts - List all workouts
//! - GET /summary - Total minutes and motivation
//! - GET /ui - Browser front end for the API

mod handlers;
mod routes;
mod state;

pub use handlers::is_json_content_type;
pub use routes::{create_router, create_router_with, RouterOptions};
pub use state::AppState;
