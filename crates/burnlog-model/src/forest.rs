//! Bagged regression trees (CART with MSE criterion)

use crate::error::ModelError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// A node in a regression tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        /// Mean target of the training samples that reached this leaf
        value: f64,
        n_samples: usize,
    },
}

impl TreeNode {
    fn predict(&self, features: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value, .. } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Single CART regression tree. Splits minimize the sum of squared errors;
/// leaves predict the mean of their training targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    root: Option<TreeNode>,
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
}

impl RegressionTree {
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), ModelError> {
        validate_training_data(x, y)?;
        let indices: Vec<usize> = (0..y.len()).collect();
        self.root = Some(build_node(
            x,
            y,
            &indices,
            0,
            self.max_depth,
            self.min_samples_split,
            self.min_samples_leaf,
        ));
        Ok(())
    }

    pub fn predict_one(&self, features: &[f64]) -> Result<f64, ModelError> {
        let root = self.root.as_ref().ok_or(ModelError::NotFitted)?;
        Ok(root.predict(features))
    }
}

impl Default for RegressionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensemble of regression trees trained on bootstrap samples; predictions
/// are averaged over all trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestRegressor {
    trees: Vec<RegressionTree>,
    n_trees: usize,
    max_depth: Option<usize>,
    seed: Option<u64>,
    n_features: usize,
}

impl ForestRegressor {
    pub fn new(n_trees: usize) -> Self {
        Self {
            trees: Vec::new(),
            n_trees,
            max_depth: None,
            seed: None,
            n_features: 0,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Feature width the model was fitted with (0 before fitting).
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), ModelError> {
        validate_training_data(x, y)?;
        let n_samples = y.len();
        self.n_features = x[0].len();
        self.trees = Vec::with_capacity(self.n_trees);

        for i in 0..self.n_trees {
            let indices = bootstrap_sample(n_samples, self.seed.map(|s| s + i as u64));

            let sample_x: Vec<Vec<f64>> = indices.iter().map(|&idx| x[idx].clone()).collect();
            let sample_y: Vec<f64> = indices.iter().map(|&idx| y[idx]).collect();

            let mut tree = match self.max_depth {
                Some(depth) => RegressionTree::new().with_max_depth(depth),
                None => RegressionTree::new(),
            };
            tree.fit(&sample_x, &sample_y)?;
            self.trees.push(tree);
        }

        Ok(())
    }

    /// Predict one sample; fails loudly on any feature-width disagreement.
    pub fn predict_one(&self, features: &[f64]) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if features.len() != self.n_features {
            return Err(ModelError::FeatureMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let sum: f64 = self
            .trees
            .iter()
            .map(|tree| tree.predict_one(features))
            .sum::<Result<f64, ModelError>>()?;
        Ok(sum / self.trees.len() as f64)
    }

    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        x.iter().map(|row| self.predict_one(row)).collect()
    }
}

fn validate_training_data(x: &[Vec<f64>], y: &[f64]) -> Result<(), ModelError> {
    if x.is_empty() || y.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }
    if x.len() != y.len() {
        return Err(ModelError::SampleMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let width = x[0].len();
    for (index, row) in x.iter().enumerate() {
        if row.len() != width {
            return Err(ModelError::RaggedSample {
                index,
                expected: width,
                got: row.len(),
            });
        }
    }
    Ok(())
}

/// Random sample with replacement; returns the chosen indices.
fn bootstrap_sample(n_samples: usize, seed: Option<u64>) -> Vec<usize> {
    let dist = Uniform::from(0..n_samples);
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..n_samples).map(|_| dist.sample(&mut rng)).collect()
        }
        None => {
            let mut rng = rand::thread_rng();
            (0..n_samples).map(|_| dist.sample(&mut rng)).collect()
        }
    }
}

fn build_node(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    depth: usize,
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
) -> TreeNode {
    let mean = indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64;

    let depth_reached = max_depth.is_some_and(|limit| depth >= limit);
    if indices.len() < min_samples_split || depth_reached {
        return TreeNode::Leaf {
            value: mean,
            n_samples: indices.len(),
        };
    }

    let Some((feature, threshold)) = best_split(x, y, indices, min_samples_leaf) else {
        return TreeNode::Leaf {
            value: mean,
            n_samples: indices.len(),
        };
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[i][feature] <= threshold);

    TreeNode::Split {
        feature,
        threshold,
        left: Box::new(build_node(
            x,
            y,
            &left_indices,
            depth + 1,
            max_depth,
            min_samples_split,
            min_samples_leaf,
        )),
        right: Box::new(build_node(
            x,
            y,
            &right_indices,
            depth + 1,
            max_depth,
            min_samples_split,
            min_samples_leaf,
        )),
    }
}

/// Find the (feature, threshold) pair minimizing the post-split sum of
/// squared errors. Returns None when no split improves on the parent.
fn best_split(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<(usize, f64)> {
    let n = indices.len();
    let n_features = x[indices[0]].len();

    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let total_sq: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;

    let mut best: Option<(usize, f64)> = None;
    let mut best_sse = parent_sse - 1e-12;

    for feature in 0..n_features {
        let mut pairs: Vec<(f64, f64)> =
            indices.iter().map(|&i| (x[i][feature], y[i])).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for k in 1..n {
            left_sum += pairs[k - 1].1;
            left_sq += pairs[k - 1].1 * pairs[k - 1].1;

            // No threshold between equal feature values
            if pairs[k - 1].0 == pairs[k].0 {
                continue;
            }
            if k < min_samples_leaf || n - k < min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / k as f64)
                + (right_sq - right_sum * right_sum / (n - k) as f64);

            if sse < best_sse {
                best_sse = sse;
                best = Some((feature, (pairs[k - 1].0 + pairs[k].0) / 2.0));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        // y = 2x, easily recovered by a tree
        let x: Vec<Vec<f64>> = (0..20).map(|i| vec![f64::from(i)]).collect();
        let y: Vec<f64> = (0..20).map(|i| f64::from(i) * 2.0).collect();
        (x, y)
    }

    #[test]
    fn test_tree_fits_and_predicts() {
        let (x, y) = linear_data();
        let mut tree = RegressionTree::new();
        tree.fit(&x, &y).unwrap();

        // Deep enough to isolate every sample
        for (row, &target) in x.iter().zip(&y) {
            assert_eq!(tree.predict_one(row).unwrap(), target);
        }
    }

    #[test]
    fn test_tree_max_depth_zero_predicts_mean() {
        let (x, y) = linear_data();
        let mut tree = RegressionTree::new().with_max_depth(0);
        tree.fit(&x, &y).unwrap();

        let mean = y.iter().sum::<f64>() / y.len() as f64;
        assert!((tree.predict_one(&x[0]).unwrap() - mean).abs() < 1e-9);
    }

    #[test]
    fn test_tree_unfitted_errors() {
        let tree = RegressionTree::new();
        assert!(matches!(
            tree.predict_one(&[1.0]),
            Err(ModelError::NotFitted)
        ));
    }

    #[test]
    fn test_forest_predictions_within_target_range() {
        let (x, y) = linear_data();
        let mut forest = ForestRegressor::new(25).with_seed(42);
        forest.fit(&x, &y).unwrap();

        for row in &x {
            let pred = forest.predict_one(row).unwrap();
            assert!(pred.is_finite());
            assert!((0.0..=38.0).contains(&pred), "prediction {pred} out of range");
        }
    }

    #[test]
    fn test_forest_seeded_fit_is_reproducible() {
        let (x, y) = linear_data();
        let mut a = ForestRegressor::new(10).with_seed(7);
        let mut b = ForestRegressor::new(10).with_seed(7);
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();

        for row in &x {
            assert_eq!(a.predict_one(row).unwrap(), b.predict_one(row).unwrap());
        }
    }

    #[test]
    fn test_forest_feature_mismatch_fails_loudly() {
        let (x, y) = linear_data();
        let mut forest = ForestRegressor::new(5).with_seed(1);
        forest.fit(&x, &y).unwrap();

        let err = forest.predict_one(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureMismatch {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_forest_rejects_bad_training_data() {
        let mut forest = ForestRegressor::new(5);
        assert!(matches!(
            forest.fit(&[], &[]),
            Err(ModelError::EmptyTrainingSet)
        ));
        assert!(matches!(
            forest.fit(&[vec![1.0]], &[1.0, 2.0]),
            Err(ModelError::SampleMismatch { .. })
        ));
        assert!(matches!(
            forest.fit(&[vec![1.0], vec![1.0, 2.0]], &[1.0, 2.0]),
            Err(ModelError::RaggedSample { .. })
        ));
    }

    #[test]
    fn test_forest_serde_roundtrip_preserves_predictions() {
        let (x, y) = linear_data();
        let mut forest = ForestRegressor::new(10).with_seed(3);
        forest.fit(&x, &y).unwrap();

        let json = serde_json::to_string(&forest).unwrap();
        let loaded: ForestRegressor = serde_json::from_str(&json).unwrap();

        for row in &x {
            assert_eq!(
                forest.predict_one(row).unwrap(),
                loaded.predict_one(row).unwrap()
            );
        }
    }
}
