pub mod config;
pub mod error;
pub mod http;
pub mod server;
pub mod workouts;

pub use config::Config;
pub use error::WorkoutError;
pub use http::{create_router, create_router_with, AppState, RouterOptions};
pub use server::serve;
pub use workouts::{
    AddWorkoutRequest, Category, CategoryLog, Motivation, NewWorkout, Summary, WorkoutEntry,
    WorkoutStore,
};
