use burnlog_core::Activity;
use burnlog_model::{CalorieEstimator, SyntheticConfig};
use std::path::Path;

pub fn run(
    activity: Activity,
    duration_min: u32,
    weight_kg: u32,
    seed: Option<u64>,
    model: Option<&Path>,
) -> anyhow::Result<()> {
    let estimator = match model {
        Some(path) => CalorieEstimator::load(path)?,
        None => CalorieEstimator::train(&SyntheticConfig::new(), seed)?,
    };

    let estimated_kcal = estimator.estimate(activity, duration_min, weight_kg)?;

    let output = serde_json::json!({
        "activity": activity,
        "duration_min": duration_min,
        "weight_kg": weight_kg,
        "estimated_kcal": estimated_kcal,
    });
    println!("{output}");
    Ok(())
}
