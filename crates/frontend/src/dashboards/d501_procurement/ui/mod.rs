mod bom;
pub mod dashboard;
mod escalation;
mod orders;
mod prices;
mod suppliers;

pub use dashboard::ProcurementDashboard;
