pub mod analyze;
pub mod datasets;
