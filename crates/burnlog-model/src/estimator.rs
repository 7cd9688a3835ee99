//! The calorie estimator: encoder + fitted forest behind one handle
//!
//! Trained once at startup and reused for every estimate. Persistence is
//! explicit (`save`/`load`); nothing is written to disk as a side effect
//! of training or prediction.

use crate::encoder::ActivityEncoder;
use crate::error::ModelError;
use crate::forest::ForestRegressor;
use crate::split::split_indices;
use crate::synthetic::{generate, SyntheticConfig};
use burnlog_core::Activity;
use serde::{Deserialize, Serialize};
use std::path::Path;

const N_TREES: usize = 100;
const VALIDATION_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEstimator {
    encoder: ActivityEncoder,
    forest: ForestRegressor,
}

impl CalorieEstimator {
    /// Train a fresh estimator on synthetic data.
    ///
    /// The 80/20 validation split only feeds a debug log line; it never
    /// affects the returned model's estimates.
    pub fn train(config: &SyntheticConfig, seed: Option<u64>) -> Result<Self, ModelError> {
        let samples = generate(config, seed);
        let encoder = ActivityEncoder::new();

        let x: Vec<Vec<f64>> = samples
            .iter()
            .map(|s| encoder.encode(s.activity, s.duration_min, s.weight_kg))
            .collect();
        let y: Vec<f64> = samples.iter().map(|s| s.kcal).collect();

        let (train_idx, validation_idx) = split_indices(samples.len(), VALIDATION_FRACTION, seed)?;

        let train_x: Vec<Vec<f64>> = train_idx.iter().map(|&i| x[i].clone()).collect();
        let train_y: Vec<f64> = train_idx.iter().map(|&i| y[i]).collect();

        let mut forest = ForestRegressor::new(N_TREES);
        if let Some(seed) = seed {
            forest = forest.with_seed(seed);
        }
        forest.fit(&train_x, &train_y)?;

        let validation_x: Vec<Vec<f64>> = validation_idx.iter().map(|&i| x[i].clone()).collect();
        let validation_y: Vec<f64> = validation_idx.iter().map(|&i| y[i]).collect();
        let predictions = forest.predict(&validation_x)?;
        tracing::debug!(
            n_train = train_y.len(),
            n_validation = validation_y.len(),
            validation_mse = mean_squared_error(&validation_y, &predictions),
            "estimator trained"
        );

        Ok(Self { encoder, forest })
    }

    /// Estimate calories burned for one input.
    ///
    /// The live input goes through the same encoder the model was fitted
    /// with; any column-layout disagreement surfaces as
    /// [`ModelError::FeatureMismatch`] instead of a silently wrong number.
    pub fn estimate(
        &self,
        activity: Activity,
        duration_min: u32,
        weight_kg: u32,
    ) -> Result<f64, ModelError> {
        self.encoder.check_width(self.forest.n_features())?;
        let features = self.encoder.encode(activity, duration_min, weight_kg);
        self.forest.predict_one(&features)
    }

    /// Export the fitted model as JSON, written atomically.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec(self)?;
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, &json)?;
        std::fs::rename(temp_path, path)?;
        tracing::info!(path = %path.display(), "model saved");
        Ok(())
    }

    /// Load a previously exported model.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path)?;
        let estimator: Self = serde_json::from_str(&json)?;
        estimator
            .encoder
            .check_width(estimator.forest.n_features())?;
        Ok(estimator)
    }
}

fn mean_squared_error(truth: &[f64], predictions: &[f64]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    truth
        .iter()
        .zip(predictions)
        .map(|(t, p)| (t - p) * (t - p))
        .sum::<f64>()
        / truth.len() as f64
}
