//! Model error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("feature and target lengths differ ({x} samples vs {y} targets)")]
    SampleMismatch { x: usize, y: usize },

    #[error("sample {index} has {got} features, expected {expected}")]
    RaggedSample {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("input has {got} feature columns but the model was fitted with {expected}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("model has not been fitted")]
    NotFitted,

    #[error("validation fraction {0} must be in (0, 1)")]
    InvalidValidationFraction(f64),

    #[error("model file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
