//! Activity labels and logged entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported activity types (fixed closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Running")]
    Running,
    #[serde(rename = "Cycling")]
    Cycling,
    #[serde(rename = "Swimming")]
    Swimming,
    #[serde(rename = "Walking")]
    Walking,
    #[serde(rename = "Gym Workout")]
    GymWorkout,
}

impl Activity {
    /// All supported activities, in the canonical display order.
    ///
    /// This order also fixes the one-hot column layout used by the model,
    /// so it must not change between training and prediction.
    pub const ALL: [Activity; 5] = [
        Activity::Running,
        Activity::Cycling,
        Activity::Swimming,
        Activity::Walking,
        Activity::GymWorkout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::Cycling => "Cycling",
            Activity::Swimming => "Swimming",
            Activity::Walking => "Walking",
            Activity::GymWorkout => "Gym Workout",
        }
    }

    /// Next activity in `ALL` order, wrapping around.
    pub fn next(&self) -> Activity {
        let idx = Activity::ALL.iter().position(|a| a == self).unwrap_or(0);
        Activity::ALL[(idx + 1) % Activity::ALL.len()]
    }

    /// Previous activity in `ALL` order, wrapping around.
    pub fn prev(&self) -> Activity {
        let idx = Activity::ALL.iter().position(|a| a == self).unwrap_or(0);
        Activity::ALL[(idx + Activity::ALL.len() - 1) % Activity::ALL.len()]
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "running" => Ok(Activity::Running),
            "cycling" => Ok(Activity::Cycling),
            "swimming" => Ok(Activity::Swimming),
            "walking" => Ok(Activity::Walking),
            "gym workout" | "gym" => Ok(Activity::GymWorkout),
            _ => Err(format!(
                "unknown activity '{s}' (expected one of: running, cycling, swimming, walking, gym-workout)"
            )),
        }
    }
}

/// One logged activity with its estimated calorie value.
///
/// Immutable after construction: the session log only hands out shared
/// references, so a logged entry can never be edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub activity: Activity,
    pub duration_min: u32,
    pub weight_kg: u32,
    pub date: NaiveDate,
    pub estimated_kcal: f64,
}
