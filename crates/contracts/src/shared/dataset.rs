//! Section datasets and the provider seam they are read through.

use crate::dashboards::d500_overview::{self, OverviewDataset};
use crate::dashboards::d501_procurement::{self, ProcurementDataset};
use crate::dashboards::d502_logistics::{self, LogisticsDataset};
use crate::dashboards::d503_warehouse::{self, WarehouseDataset};
use crate::dashboards::d504_customs::{self, CustomsDataset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Раздел, владеющий собственным набором данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Overview,
    Procurement,
    Logistics,
    Warehouse,
    Customs,
}

impl SectionKey {
    pub fn code(&self) -> &'static str {
        match self {
            SectionKey::Overview => "overview",
            SectionKey::Procurement => "procurement",
            SectionKey::Logistics => "logistics",
            SectionKey::Warehouse => "warehouse",
            SectionKey::Customs => "customs",
        }
    }

    pub fn all() -> Vec<SectionKey> {
        vec![
            SectionKey::Overview,
            SectionKey::Procurement,
            SectionKey::Logistics,
            SectionKey::Warehouse,
            SectionKey::Customs,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Набор данных любого раздела
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "lowercase")]
pub enum SectionDataset {
    Overview(OverviewDataset),
    Procurement(ProcurementDataset),
    Logistics(LogisticsDataset),
    Warehouse(WarehouseDataset),
    Customs(CustomsDataset),
}

impl SectionDataset {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionDataset::Overview(_) => SectionKey::Overview,
            SectionDataset::Procurement(_) => SectionKey::Procurement,
            SectionDataset::Logistics(_) => SectionKey::Logistics,
            SectionDataset::Warehouse(_) => SectionKey::Warehouse,
            SectionDataset::Customs(_) => SectionKey::Customs,
        }
    }
}

/// Source of section datasets.
///
/// Datasets are immutable for the session; every call returns a fresh copy.
pub trait DatasetProvider {
    fn overview(&self) -> OverviewDataset;
    fn procurement(&self) -> ProcurementDataset;
    fn logistics(&self) -> LogisticsDataset;
    fn warehouse(&self) -> WarehouseDataset;
    fn customs(&self) -> CustomsDataset;

    fn fetch_dataset(&self, section: SectionKey) -> SectionDataset {
        match section {
            SectionKey::Overview => SectionDataset::Overview(self.overview()),
            SectionKey::Procurement => SectionDataset::Procurement(self.procurement()),
            SectionKey::Logistics => SectionDataset::Logistics(self.logistics()),
            SectionKey::Warehouse => SectionDataset::Warehouse(self.warehouse()),
            SectionKey::Customs => SectionDataset::Customs(self.customs()),
        }
    }
}

/// Провайдер, разделяемый между сервером и интерфейсом
pub type SharedDatasets = Arc<dyn DatasetProvider + Send + Sync>;

/// Встроенные демонстрационные данные
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDatasets;

impl DatasetProvider for SampleDatasets {
    fn overview(&self) -> OverviewDataset {
        d500_overview::sample::sample_dataset()
    }

    fn procurement(&self) -> ProcurementDataset {
        d501_procurement::sample::sample_dataset()
    }

    fn logistics(&self) -> LogisticsDataset {
        d502_logistics::sample::sample_dataset()
    }

    fn warehouse(&self) -> WarehouseDataset {
        d503_warehouse::sample::sample_dataset()
    }

    fn customs(&self) -> CustomsDataset {
        d504_customs::sample::sample_dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_codes() {
        for key in SectionKey::all() {
            assert_eq!(SectionKey::from_code(key.code()), Some(key));
        }
        assert_eq!(SectionKey::from_code("finance"), None);
        assert_eq!(SectionKey::from_code("Procurement"), None);
    }

    #[test]
    fn test_fetch_dataset_matches_section() {
        let provider = SampleDatasets;
        for key in SectionKey::all() {
            assert_eq!(provider.fetch_dataset(key).key(), key);
        }
    }

    #[test]
    fn test_dataset_json_is_tagged() {
        let json = serde_json::to_value(SampleDatasets.fetch_dataset(SectionKey::Logistics)).unwrap();
        assert_eq!(json["section"], "logistics");
        assert_eq!(json["data"]["shipments"][0]["id"], "TRK-9001");
    }

    /// Sample data with customs cleared out
    struct NoCustoms;

    impl DatasetProvider for NoCustoms {
        fn overview(&self) -> OverviewDataset {
            SampleDatasets.overview()
        }
        fn procurement(&self) -> ProcurementDataset {
            SampleDatasets.procurement()
        }
        fn logistics(&self) -> LogisticsDataset {
            SampleDatasets.logistics()
        }
        fn warehouse(&self) -> WarehouseDataset {
            SampleDatasets.warehouse()
        }
        fn customs(&self) -> CustomsDataset {
            CustomsDataset {
                imports: Vec::new(),
                exports: Vec::new(),
            }
        }
    }

    #[test]
    fn test_shared_provider_is_swappable() {
        let provider: SharedDatasets = Arc::new(NoCustoms);
        match provider.fetch_dataset(SectionKey::Customs) {
            SectionDataset::Customs(c) => {
                assert!(c.imports.is_empty());
                assert!(c.exports.is_empty());
            }
            other => panic!("unexpected section {:?}", other.key()),
        }
        assert_eq!(provider.procurement().open_orders.len(), 8);
    }

    #[test]
    fn test_sample_record_counts() {
        let p = SampleDatasets.procurement();
        assert_eq!(p.price_analysis.len(), 4);
        assert_eq!(p.escalation.len(), 3);
        assert_eq!(p.suppliers.len(), 4);
        assert_eq!(p.bom_errors.len(), 3);
        assert_eq!(p.annual_summary.len(), 4);
        assert_eq!(p.open_orders.len(), 8);
        assert_eq!(SampleDatasets.customs().imports.len(), 4);
        assert_eq!(SampleDatasets.customs().exports.len(), 3);
    }
}
