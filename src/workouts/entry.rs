use super::category::Category;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Wire format for entry timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single recorded exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Exercise name, trimmed and non-empty
    pub exercise: String,

    /// Duration in minutes (always > 0)
    pub duration: u32,

    /// Local server time when the entry was recorded
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

/// An entry annotated with the category it was recorded under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedEntry {
    #[serde(flatten)]
    pub entry: WorkoutEntry,
    pub category: Category,
}

/// A validated add-workout request, ready to be timestamped and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub category: Category,
    pub exercise: String,
    pub duration: u32,
}

impl NewWorkout {
    pub fn into_entry(self, recorded_at: NaiveDateTime) -> (Category, WorkoutEntry) {
        let entry = WorkoutEntry {
            exercise: self.exercise,
            duration: self.duration,
            // Whole seconds only, matching the wire format
            timestamp: recorded_at.with_nanosecond(0).unwrap_or(recorded_at),
        };
        (self.category, entry)
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_milli_opt(h, m, s, 750)
            .unwrap()
    }

    #[test]
    fn test_entry_serialization_shape() {
        let (category, entry) = NewWorkout {
            category: Category::WarmUp,
            exercise: "Stretching".to_string(),
            duration: 10,
        }
        .into_entry(at(7, 5, 9));

        assert_eq!(category, Category::WarmUp);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["exercise"], "Stretching");
        assert_eq!(json["duration"], 10);
        assert_eq!(json["timestamp"], "2025-03-14 07:05:09");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_categorized_entry_is_flat() {
        let (category, entry) = NewWorkout {
            category: Category::CoolDown,
            exercise: "Walk".to_string(),
            duration: 5,
        }
        .into_entry(at(18, 0, 0));

        let json = serde_json::to_value(CategorizedEntry { entry, category }).unwrap();
        assert_eq!(json["exercise"], "Walk");
        assert_eq!(json["category"], "Cool-down");
        assert_eq!(json["timestamp"], "2025-03-14 18:00:00");
    }

    #[test]
    fn test_timestamp_parses_back() {
        let json = r#"{"exercise":"Row","duration":20,"timestamp":"2025-03-14 06:30:00"}"#;
        let entry: WorkoutEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.timestamp, at(6, 30, 0).with_nanosecond(0).unwrap());
    }
}
