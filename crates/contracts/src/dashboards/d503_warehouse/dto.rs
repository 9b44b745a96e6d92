use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

/// Складские категории запасов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockCategory {
    FinishedGoods,
    RawMaterial,
    Wip,
    Packaging,
}

impl StockCategory {
    pub fn label_key(&self) -> TextKey {
        match self {
            StockCategory::FinishedGoods => TextKey::FinishedGoods,
            StockCategory::RawMaterial => TextKey::RawMaterial,
            StockCategory::Wip => TextKey::Wip,
            StockCategory::Packaging => TextKey::StockPackaging,
        }
    }
}

/// Сверхурочные часы за день недели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    pub day: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub category: StockCategory,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseDataset {
    pub overtime: Vec<OvertimeRecord>,
    pub stock: Vec<StockRecord>,
}
