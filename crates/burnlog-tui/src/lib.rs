//! Terminal dashboard for logging activities and viewing progress

mod app;
mod term;
mod view;

pub use app::App;
pub use term::run;
pub use view::{calorie_series, duration_share};
