use super::category::Category;
use super::entry::{CategorizedEntry, WorkoutEntry};
use serde::{Deserialize, Serialize};

/// Entries grouped by category, each list in insertion order.
///
/// Serializes as a JSON object with exactly the three category names as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLog {
    #[serde(rename = "Warm-up")]
    warm_up: Vec<WorkoutEntry>,

    #[serde(rename = "Workout")]
    workout: Vec<WorkoutEntry>,

    #[serde(rename = "Cool-down")]
    cool_down: Vec<WorkoutEntry>,
}

impl CategoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &[WorkoutEntry] {
        match category {
            Category::WarmUp => &self.warm_up,
            Category::Workout => &self.workout,
            Category::CoolDown => &self.cool_down,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<WorkoutEntry> {
        match category {
            Category::WarmUp => &mut self.warm_up,
            Category::Workout => &mut self.workout,
            Category::CoolDown => &mut self.cool_down,
        }
    }

    pub fn push(&mut self, category: Category, entry: WorkoutEntry) {
        self.entries_mut(category).push(entry);
    }

    /// Total number of entries across all categories
    pub fn count(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    /// Sum of all entry durations, in minutes
    pub fn total_minutes(&self) -> u64 {
        Category::ALL
            .iter()
            .flat_map(|c| self.entries(*c))
            .map(|entry| u64::from(entry.duration))
            .sum()
    }

    /// All entries tagged with their category, category by category
    pub fn flatten(&self) -> Vec<CategorizedEntry> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.entries(category)
                    .iter()
                    .map(move |entry| CategorizedEntry {
                        entry: entry.clone(),
                        category,
                    })
            })
            .collect()
    }
}
