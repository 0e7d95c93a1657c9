//! Workout domain model and in-memory store
//!
//! - `Category` - the three fixed workout phases
//! - `WorkoutEntry` - one recorded exercise
//! - `CategoryLog` - entries grouped by category in insertion order
//! - `AddWorkoutRequest` - typed body of an add-workout request and its validation
//! - `Summary` - total minutes and motivational tier
//! - `WorkoutStore` - the shared, lock-guarded store

mod category;
mod entry;
mod log;
mod request;
mod store;
mod summary;

pub use category::Category;
pub use entry::{CategorizedEntry, NewWorkout, WorkoutEntry, TIMESTAMP_FORMAT};
pub use log::CategoryLog;
pub use request::AddWorkoutRequest;
pub use store::WorkoutStore;
pub use summary::{Motivation, Summary};
