//! Train/validation index splitting

use crate::error::ModelError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `0..n` and split into (train, validation) index sets.
///
/// The validation portion is `(n * validation_fraction)` rounded; both
/// halves must end up non-empty.
pub fn split_indices(
    n: usize,
    validation_fraction: f64,
    seed: Option<u64>,
) -> Result<(Vec<usize>, Vec<usize>), ModelError> {
    if !(0.0..1.0).contains(&validation_fraction) || validation_fraction == 0.0 {
        return Err(ModelError::InvalidValidationFraction(validation_fraction));
    }

    let n_validation = (n as f64 * validation_fraction).round() as usize;
    let n_train = n.saturating_sub(n_validation);
    if n_train == 0 || n_validation == 0 {
        return Err(ModelError::EmptyTrainingSet);
    }

    let mut indices: Vec<usize> = (0..n).collect();
    match seed {
        Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => indices.shuffle(&mut rand::thread_rng()),
    }

    let validation = indices.split_off(n_train);
    Ok((indices, validation))
}
