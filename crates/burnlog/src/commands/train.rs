use burnlog_model::{CalorieEstimator, SyntheticConfig};
use std::path::Path;

pub fn run(out: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let estimator = CalorieEstimator::train(&SyntheticConfig::new(), seed)?;
    estimator.save(out)?;
    println!("model written to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_writes_loadable_model() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("model.json");

        run(&path, Some(42)).unwrap();
        assert!(path.exists());
        assert!(CalorieEstimator::load(&path).is_ok());
    }
}
