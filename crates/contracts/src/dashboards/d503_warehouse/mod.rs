pub mod dto;
pub mod metrics;
pub mod sample;

pub use dto::WarehouseDataset;
