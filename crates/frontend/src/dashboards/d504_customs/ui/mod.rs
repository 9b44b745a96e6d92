pub mod dashboard;

pub use dashboard::CustomsDashboard;
