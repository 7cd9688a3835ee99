use burnlog_model::{CalorieEstimator, SyntheticConfig};
use burnlog_tui::App;

/// Train the estimator once, then hand the session to the TUI loop.
pub fn run(seed: Option<u64>) -> anyhow::Result<()> {
    let estimator = CalorieEstimator::train(&SyntheticConfig::new(), seed)?;
    let today = chrono::Local::now().date_naive();
    let mut app = App::new(estimator, today)?;
    burnlog_tui::run(&mut app)
}
