use super::category::Category;
use super::entry::NewWorkout;
use crate::error::WorkoutError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A field present in the body, either with the expected JSON type or with
/// something else (including `null`).
#[derive(Debug, Clone)]
enum Field<T> {
    Valid(T),
    Mistyped,
}

impl<T: DeserializeOwned> Field<T> {
    fn take(body: &mut Map<String, Value>, key: &str) -> Option<Self> {
        body.remove(key).map(|value| {
            serde_json::from_value(value)
                .map(Field::Valid)
                .unwrap_or(Field::Mistyped)
        })
    }
}

/// Accepted JSON shapes for `duration`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum DurationInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl DurationInput {
    /// Convert to whole minutes. Floats truncate toward zero; text must be a
    /// base-10 integer, surrounding whitespace allowed.
    pub fn to_minutes(&self) -> Result<u32, WorkoutError> {
        let value = match self {
            DurationInput::Integer(n) => *n,
            DurationInput::Float(f) => {
                let truncated = f.trunc();
                if !truncated.is_finite() || truncated < 1.0 || truncated > f64::from(u32::MAX) {
                    return Err(WorkoutError::InvalidDuration);
                }
                truncated as i64
            }
            DurationInput::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| WorkoutError::InvalidDuration)?,
        };

        if value <= 0 {
            return Err(WorkoutError::InvalidDuration);
        }
        u32::try_from(value).map_err(|_| WorkoutError::InvalidDuration)
    }
}

/// Body of `POST /workouts`. `None` means the key was absent.
#[derive(Debug, Clone, Default)]
pub struct AddWorkoutRequest {
    category: Option<Field<String>>,
    workout: Option<Field<String>>,
    duration: Option<Field<DurationInput>>,
}

impl AddWorkoutRequest {
    /// Parse a JSON body. Invalid JSON or anything other than an object yields
    /// an empty request, which then fails validation on the first required
    /// field. Duplicate keys keep the last value.
    pub fn from_json_bytes(body: &[u8]) -> Self {
        let Ok(mut body) = serde_json::from_slice::<Map<String, Value>>(body) else {
            return Self::default();
        };

        Self {
            category: Field::take(&mut body, "category"),
            workout: Field::take(&mut body, "workout"),
            duration: Field::take(&mut body, "duration"),
        }
    }

    /// Check category, then workout name, then duration.
    pub fn validate(self) -> Result<NewWorkout, WorkoutError> {
        let category = match self.category {
            None => Category::default(),
            Some(Field::Valid(name)) => name.parse()?,
            Some(Field::Mistyped) => return Err(WorkoutError::InvalidCategory),
        };

        let exercise = match self.workout {
            Some(Field::Valid(name)) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Err(WorkoutError::MissingField),
        };

        let duration = match self.duration {
            Some(Field::Valid(input)) => input.to_minutes()?,
            _ => return Err(WorkoutError::InvalidDuration),
        };

        Ok(NewWorkout {
            category,
            exercise,
            duration,
        })
    }
}
