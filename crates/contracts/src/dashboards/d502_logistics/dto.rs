use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentType {
    Import,
    Export,
    Local,
}

impl ShipmentType {
    pub fn label_key(&self) -> TextKey {
        match self {
            ShipmentType::Import => TextKey::ImportLabel,
            ShipmentType::Export => TextKey::ExportLabel,
            ShipmentType::Local => TextKey::LocalLabel,
        }
    }
}

/// Загрузка транспорта по типу перевозки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    pub shipment_type: ShipmentType,
    /// Средний коэффициент загрузки, %
    pub load_factor: f64,
    pub count: u32,
}

/// Плановая отправка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub id: String,
    pub route: String,
    pub shipment_type: ShipmentType,
    pub vehicle: String,
    /// Загрузка, %
    pub load: f64,
    /// Format "YYYY-MM-DD"
    pub eta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsDataset {
    pub utilization: Vec<UtilizationRecord>,
    pub shipments: Vec<ShipmentRecord>,
}
