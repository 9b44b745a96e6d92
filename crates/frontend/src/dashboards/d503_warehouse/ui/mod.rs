pub mod dashboard;

pub use dashboard::WarehouseDashboard;
