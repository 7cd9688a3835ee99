//! Core domain types for the burnlog fitness dashboard

mod input;
mod session;
mod types;

pub use input::{
    ActivityForm, FormField, DEFAULT_DURATION_MIN, DEFAULT_WEIGHT_KG, DURATION_MAX_MIN,
    DURATION_MIN_MIN, DURATION_STEP_MIN, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
pub use session::SessionLog;
pub use types::{Activity, ActivityEntry};
