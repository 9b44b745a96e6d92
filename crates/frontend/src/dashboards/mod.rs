pub mod d500_overview;
pub mod d501_procurement;
pub mod d502_logistics;
pub mod d503_warehouse;
pub mod d504_customs;

pub use d500_overview::ui::OverviewDashboard;
pub use d501_procurement::ui::ProcurementDashboard;
pub use d502_logistics::ui::LogisticsDashboard;
pub use d503_warehouse::ui::WarehouseDashboard;
pub use d504_customs::ui::CustomsDashboard;
