//! Dashboard state and key handling

use burnlog_core::{ActivityEntry, ActivityForm, SessionLog};
use burnlog_model::{CalorieEstimator, ModelError};
use chrono::NaiveDate;
use crossterm::event::KeyCode;

/// Per-session dashboard state: the input form, the session log and the
/// estimator trained once at startup.
///
/// Each interaction mutates this state synchronously on the render thread;
/// there is no shared or concurrent access.
pub struct App {
    form: ActivityForm,
    log: SessionLog,
    estimator: CalorieEstimator,
    estimate_kcal: f64,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(estimator: CalorieEstimator, today: NaiveDate) -> Result<Self, ModelError> {
        let form = ActivityForm::new(today);
        let (activity, duration, weight, _) = form.values();
        let estimate_kcal = estimator.estimate(activity, duration, weight)?;

        Ok(Self {
            form,
            log: SessionLog::new(),
            estimator,
            estimate_kcal,
            status: None,
            should_quit: false,
        })
    }

    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn estimate_kcal(&self) -> f64 {
        self.estimate_kcal
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one key press.
    pub fn on_key(&mut self, code: KeyCode) -> Result<(), ModelError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                self.status = None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                self.status = None;
            }
            KeyCode::Right | KeyCode::Char('+') => {
                self.form.increment();
                self.refresh_estimate()?;
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.form.decrement();
                self.refresh_estimate()?;
            }
            KeyCode::Enter => {
                self.add_entry();
            }
            _ => {}
        }
        Ok(())
    }

    /// Re-run the estimator against the live form values.
    ///
    /// The date is not a model feature; only activity, duration and weight
    /// feed the estimate.
    fn refresh_estimate(&mut self) -> Result<(), ModelError> {
        let (activity, duration, weight, _) = self.form.values();
        self.estimate_kcal = self.estimator.estimate(activity, duration, weight)?;
        self.status = None;
        Ok(())
    }

    /// Confirm the current form: log an entry carrying the estimate shown
    /// at confirmation time.
    fn add_entry(&mut self) {
        let (activity, duration_min, weight_kg, date) = self.form.values();
        self.log.append(ActivityEntry {
            activity,
            duration_min,
            weight_kg,
            date,
            estimated_kcal: self.estimate_kcal,
        });
        self.status = Some("Activity logged".to_string());
    }
}
