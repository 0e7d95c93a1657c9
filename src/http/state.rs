use crate::workouts::WorkoutStore;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Workouts recorded since the server started
    pub store: WorkoutStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(WorkoutStore::new())
    }

    pub fn with_store(store: WorkoutStore) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
