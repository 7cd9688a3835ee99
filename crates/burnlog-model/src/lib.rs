//! Calorie estimation model: synthetic training data, encoding and a
//! bagged regression-tree ensemble

mod encoder;
mod error;
mod estimator;
mod forest;
mod split;
mod synthetic;

pub use encoder::ActivityEncoder;
pub use error::ModelError;
pub use estimator::CalorieEstimator;
pub use forest::{ForestRegressor, RegressionTree};
pub use split::split_indices;
pub use synthetic::{generate, SyntheticConfig, TrainingSample};
