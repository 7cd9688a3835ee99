//! Feature encoding for activity samples

use crate::error::ModelError;
use burnlog_core::Activity;
use serde::{Deserialize, Serialize};

/// One-hot encoder over the fixed activity set, first category dropped
/// to avoid collinearity.
///
/// The column layout is `[duration, weight, onehot(activities[1..])]` and
/// is fixed at construction; `encode` always emits exactly
/// [`n_features`](ActivityEncoder::n_features) columns, and the estimator
/// cross-checks that width against the fitted model so any disagreement
/// fails loudly instead of silently misaligning columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEncoder {
    /// Categories that get a one-hot column (all but the first of
    /// `Activity::ALL`, in order)
    dummy_categories: Vec<Activity>,
}

impl ActivityEncoder {
    pub fn new() -> Self {
        Self {
            dummy_categories: Activity::ALL[1..].to_vec(),
        }
    }

    /// Number of feature columns produced per sample.
    pub fn n_features(&self) -> usize {
        2 + self.dummy_categories.len()
    }

    /// Encode one `(activity, duration, weight)` triple.
    pub fn encode(&self, activity: Activity, duration_min: u32, weight_kg: u32) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.n_features());
        features.push(f64::from(duration_min));
        features.push(f64::from(weight_kg));
        for category in &self.dummy_categories {
            features.push(if *category == activity { 1.0 } else { 0.0 });
        }
        features
    }

    /// Verify that a fitted model's expected width matches this encoder.
    pub fn check_width(&self, model_width: usize) -> Result<(), ModelError> {
        if model_width != self.n_features() {
            return Err(ModelError::FeatureMismatch {
                expected: model_width,
                got: self.n_features(),
            });
        }
        Ok(())
    }
}

impl Default for ActivityEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_fixed() {
        let encoder = ActivityEncoder::new();
        assert_eq!(encoder.n_features(), 6);
        for activity in Activity::ALL {
            assert_eq!(encoder.encode(activity, 30, 70).len(), 6);
        }
    }

    #[test]
    fn test_first_category_dropped() {
        let encoder = ActivityEncoder::new();
        // Running is the dropped baseline: all dummies zero
        let running = encoder.encode(Activity::Running, 30, 70);
        assert_eq!(running, vec![30.0, 70.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_positions() {
        let encoder = ActivityEncoder::new();
        let cycling = encoder.encode(Activity::Cycling, 60, 80);
        assert_eq!(cycling, vec![60.0, 80.0, 1.0, 0.0, 0.0, 0.0]);
        let gym = encoder.encode(Activity::GymWorkout, 60, 80);
        assert_eq!(gym, vec![60.0, 80.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_exactly_one_dummy_set_for_non_baseline() {
        let encoder = ActivityEncoder::new();
        for activity in &Activity::ALL[1..] {
            let features = encoder.encode(*activity, 30, 70);
            let ones = features[2..].iter().filter(|v| **v == 1.0).count();
            assert_eq!(ones, 1, "{activity} should set exactly one dummy");
        }
    }

    #[test]
    fn test_check_width_mismatch_fails() {
        let encoder = ActivityEncoder::new();
        assert!(encoder.check_width(6).is_ok());
        let err = encoder.check_width(5).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureMismatch {
                expected: 5,
                got: 6
            }
        ));
    }
}
