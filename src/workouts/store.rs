use super::entry::{NewWorkout, WorkoutEntry};
use super::log::CategoryLog;
use super::summary::Summary;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory workout store shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same data. All reads and writes
/// go through a single lock, so a snapshot never observes a half-applied add.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    log: Arc<RwLock<CategoryLog>>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated workout, stamped with `recorded_at`
    pub async fn record(&self, new: NewWorkout, recorded_at: NaiveDateTime) -> WorkoutEntry {
        let (category, entry) = new.into_entry(recorded_at);

        let mut log = self.log.write().await;
        log.push(category, entry.clone());

        info!(
            "Recorded {} min of '{}' under {} ({} total entries)",
            entry.duration,
            entry.exercise,
            category,
            log.count()
        );

        entry
    }

    /// Copy of every category's entries at this moment
    pub async fn snapshot(&self) -> CategoryLog {
        self.log.read().await.clone()
    }

    pub async fn summary(&self) -> Summary {
        Summary::from_log(self.snapshot().await)
    }

    pub async fn count(&self) -> usize {
        self.log.read().await.count()
    }
}
