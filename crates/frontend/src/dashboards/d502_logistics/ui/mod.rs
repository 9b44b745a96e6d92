pub mod dashboard;

pub use dashboard::LogisticsDashboard;
