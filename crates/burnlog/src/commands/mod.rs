pub mod dashboard;
pub mod estimate;
pub mod train;
pub mod version;
