//! Input form state with widget-level clamping

use crate::types::Activity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DURATION_MIN_MIN: u32 = 5;
pub const DURATION_MAX_MIN: u32 = 180;
pub const DURATION_STEP_MIN: u32 = 5;
pub const DEFAULT_DURATION_MIN: u32 = 30;

pub const WEIGHT_MIN_KG: u32 = 30;
pub const WEIGHT_MAX_KG: u32 = 150;
pub const DEFAULT_WEIGHT_KG: u32 = 70;

/// Fields of the activity form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Activity,
    Duration,
    Weight,
    Date,
}

const FIELD_ORDER: [FormField; 4] = [
    FormField::Activity,
    FormField::Duration,
    FormField::Weight,
    FormField::Date,
];

/// Current form selections for logging an activity.
///
/// Range constraints are enforced here, at the widget level: duration and
/// weight saturate at their bounds, so invalid values are structurally
/// impossible and no downstream validation exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityForm {
    pub activity: Activity,
    pub duration_min: u32,
    pub weight_kg: u32,
    pub date: NaiveDate,
    pub focused: FormField,
}

impl ActivityForm {
    /// Form with default selections; `today` becomes the default date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            activity: Activity::Running,
            duration_min: DEFAULT_DURATION_MIN,
            weight_kg: DEFAULT_WEIGHT_KG,
            date: today,
            focused: FormField::Activity,
        }
    }

    pub fn focus_next(&mut self) {
        let idx = FIELD_ORDER
            .iter()
            .position(|f| *f == self.focused)
            .unwrap_or(0);
        self.focused = FIELD_ORDER[(idx + 1) % FIELD_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = FIELD_ORDER
            .iter()
            .position(|f| *f == self.focused)
            .unwrap_or(0);
        self.focused = FIELD_ORDER[(idx + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()];
    }

    /// Increment the focused field by one widget step.
    pub fn increment(&mut self) {
        match self.focused {
            FormField::Activity => self.activity = self.activity.next(),
            FormField::Duration => {
                self.duration_min = (self.duration_min + DURATION_STEP_MIN).min(DURATION_MAX_MIN);
            }
            FormField::Weight => {
                self.weight_kg = (self.weight_kg + 1).min(WEIGHT_MAX_KG);
            }
            FormField::Date => {
                if let Some(next) = self.date.succ_opt() {
                    self.date = next;
                }
            }
        }
    }

    /// Decrement the focused field by one widget step.
    pub fn decrement(&mut self) {
        match self.focused {
            FormField::Activity => self.activity = self.activity.prev(),
            FormField::Duration => {
                self.duration_min = self
                    .duration_min
                    .saturating_sub(DURATION_STEP_MIN)
                    .max(DURATION_MIN_MIN);
            }
            FormField::Weight => {
                self.weight_kg = self.weight_kg.saturating_sub(1).max(WEIGHT_MIN_KG);
            }
            FormField::Date => {
                if let Some(prev) = self.date.pred_opt() {
                    self.date = prev;
                }
            }
        }
    }

    /// Snapshot of the current selections.
    pub fn values(&self) -> (Activity, u32, u32, NaiveDate) {
        (self.activity, self.duration_min, self.weight_kg, self.date)
    }
}
