//! Synthetic training data generation
//!
//! The calorie target is drawn uniformly at random and has no real
//! relationship to the features. That is a deliberate property of the
//! product (placeholder data, not a real calorie formula), so estimates
//! are statistically meaningless but structurally well-formed.

use burnlog_core::Activity;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Ranges for the generated training set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    pub n_samples: usize,
    /// Duration range in minutes, half-open
    pub duration_min: u32,
    pub duration_max: u32,
    /// Weight range in kg, half-open
    pub weight_min: u32,
    pub weight_max: u32,
    /// Target calorie range, half-open
    pub kcal_min: u32,
    pub kcal_max: u32,
}

impl SyntheticConfig {
    pub fn new() -> Self {
        Self {
            n_samples: 250,
            duration_min: 10,
            duration_max: 120,
            weight_min: 50,
            weight_max: 100,
            kcal_min: 100,
            kcal_max: 900,
        }
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One synthetic sample: same shape as a logged entry, random content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub activity: Activity,
    pub duration_min: u32,
    pub weight_kg: u32,
    pub kcal: f64,
}

/// Generate `config.n_samples` samples. Activity labels are assigned
/// cyclically through [`Activity::ALL`]; numeric fields are uniform draws.
pub fn generate(config: &SyntheticConfig, seed: Option<u64>) -> Vec<TrainingSample> {
    match seed {
        Some(seed) => generate_with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(config, &mut rand::thread_rng()),
    }
}

fn generate_with_rng<R: Rng>(config: &SyntheticConfig, rng: &mut R) -> Vec<TrainingSample> {
    let duration = Uniform::from(config.duration_min..config.duration_max);
    let weight = Uniform::from(config.weight_min..config.weight_max);
    let kcal = Uniform::from(config.kcal_min..config.kcal_max);

    (0..config.n_samples)
        .map(|i| TrainingSample {
            activity: Activity::ALL[i % Activity::ALL.len()],
            duration_min: duration.sample(rng),
            weight_kg: weight.sample(rng),
            kcal: f64::from(kcal.sample(rng)),
        })
        .collect()
}
