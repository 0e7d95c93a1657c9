use super::log::CategoryLog;
use serde::{Serialize, Serializer};

/// Motivational tier picked from the total minutes logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    /// Under 30 minutes
    GoodStart,
    /// 30 to 59 minutes
    NiceEffort,
    /// 60 minutes or more
    Excellent,
}

impl Motivation {
    pub fn for_total(total_minutes: u64) -> Self {
        match total_minutes {
            0..=29 => Motivation::GoodStart,
            30..=59 => Motivation::NiceEffort,
            _ => Motivation::Excellent,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Motivation::GoodStart => "Good start! Keep moving 💪",
            Motivation::NiceEffort => "Nice effort! You're building consistency 🔥",
            Motivation::Excellent => "Excellent dedication! Keep up the great work 🏆",
        }
    }
}

impl Serialize for Motivation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Aggregate view returned by `GET /summary`
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub by_category: CategoryLog,
    pub total_time: u64,
    pub motivation: Motivation,
}

impl Summary {
    pub fn from_log(log: CategoryLog) -> Self {
        let total_time = log.total_minutes();
        Self {
            by_category: log,
            total_time,
            motivation: Motivation::for_total(total_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Motivation::for_total(0), Motivation::GoodStart);
        assert_eq!(Motivation::for_total(29), Motivation::GoodStart);
        assert_eq!(Motivation::for_total(30), Motivation::NiceEffort);
        assert_eq!(Motivation::for_total(59), Motivation::NiceEffort);
        assert_eq!(Motivation::for_total(60), Motivation::Excellent);
        assert_eq!(Motivation::for_total(10_000), Motivation::Excellent);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_log(CategoryLog::new());
        assert_eq!(summary.total_time, 0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["motivation"], "Good start! Keep moving 💪");
        assert_eq!(json["total_time"], 0);
        assert!(json["by_category"]["Workout"].as_array().unwrap().is_empty());
    }
}
