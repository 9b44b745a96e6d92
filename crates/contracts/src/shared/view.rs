//! View registry.
//!
//! A view is either the top-level dashboard or a `(section, subview)` pair.
//! String keys like `"procurement-prices"` are parsed once with
//! [`View::from_key`]; everything downstream matches on the enum.

use crate::enums::Language;
use crate::shared::i18n::{translate, TextKey};
use serde::{Deserialize, Serialize};

/// Marker shown in the header when a key has no registered title.
pub const NOT_AVAILABLE: &str = "N/A";

/// Разделы с подвидами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Procurement,
    Logistics,
    Warehouse,
    Customs,
}

impl Section {
    /// Префикс ключа вида (`procurement-...`)
    pub fn code(&self) -> &'static str {
        match self {
            Section::Procurement => "procurement",
            Section::Logistics => "logistics",
            Section::Warehouse => "warehouse",
            Section::Customs => "customs",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            Section::Procurement => TextKey::Procurement,
            Section::Logistics => TextKey::Logistics,
            Section::Warehouse => TextKey::Warehouse,
            Section::Customs => TextKey::Customs,
        }
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Procurement,
            Section::Logistics,
            Section::Warehouse,
            Section::Customs,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "procurement" => Some(Section::Procurement),
            "logistics" => Some(Section::Logistics),
            "warehouse" => Some(Section::Warehouse),
            "customs" => Some(Section::Customs),
            _ => None,
        }
    }

    /// Все виды раздела в порядке меню
    pub fn views(&self) -> Vec<View> {
        match self {
            Section::Procurement => ProcurementTab::all()
                .into_iter()
                .map(View::Procurement)
                .collect(),
            Section::Logistics => LogisticsTab::all().into_iter().map(View::Logistics).collect(),
            Section::Warehouse => WarehouseTab::all().into_iter().map(View::Warehouse).collect(),
            Section::Customs => CustomsTab::all().into_iter().map(View::Customs).collect(),
        }
    }

    /// Вид раздела по суффиксу; неизвестный суффикс даёт подвид по умолчанию
    fn view_for(&self, subview: &str) -> View {
        match self {
            Section::Procurement => View::Procurement(ProcurementTab::from_code(subview).unwrap_or_default()),
            Section::Logistics => View::Logistics(LogisticsTab::from_code(subview).unwrap_or_default()),
            Section::Warehouse => View::Warehouse(WarehouseTab::from_code(subview).unwrap_or_default()),
            Section::Customs => View::Customs(CustomsTab::from_code(subview).unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcurementTab {
    #[default]
    Orders,
    Prices,
    Escalation,
    Suppliers,
    Bom,
}

impl ProcurementTab {
    pub fn code(&self) -> &'static str {
        match self {
            ProcurementTab::Orders => "orders",
            ProcurementTab::Prices => "prices",
            ProcurementTab::Escalation => "escalation",
            ProcurementTab::Suppliers => "suppliers",
            ProcurementTab::Bom => "bom",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            ProcurementTab::Orders => TextKey::OrderAnalysis,
            ProcurementTab::Prices => TextKey::PriceAnalysis,
            ProcurementTab::Escalation => TextKey::EscalationAnalysis,
            ProcurementTab::Suppliers => TextKey::SupplierPerformance,
            ProcurementTab::Bom => TextKey::BomControl,
        }
    }

    pub fn all() -> Vec<ProcurementTab> {
        vec![
            ProcurementTab::Orders,
            ProcurementTab::Prices,
            ProcurementTab::Escalation,
            ProcurementTab::Suppliers,
            ProcurementTab::Bom,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogisticsTab {
    #[default]
    Reservation,
    Transport,
}

impl LogisticsTab {
    pub fn code(&self) -> &'static str {
        match self {
            LogisticsTab::Reservation => "reservation",
            LogisticsTab::Transport => "transport",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            LogisticsTab::Reservation => TextKey::ReservationPerformance,
            LogisticsTab::Transport => TextKey::Transportation,
        }
    }

    pub fn all() -> Vec<LogisticsTab> {
        vec![LogisticsTab::Reservation, LogisticsTab::Transport]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseTab {
    #[default]
    Dashboard,
    Inefficiency,
}

impl WarehouseTab {
    pub fn code(&self) -> &'static str {
        match self {
            WarehouseTab::Dashboard => "dashboard",
            WarehouseTab::Inefficiency => "inefficiency",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            WarehouseTab::Dashboard => TextKey::WarehousePerformance,
            WarehouseTab::Inefficiency => TextKey::InefficiencyCosts,
        }
    }

    pub fn all() -> Vec<WarehouseTab> {
        vec![WarehouseTab::Dashboard, WarehouseTab::Inefficiency]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomsTab {
    #[default]
    Dashboard,
    Import,
    Export,
}

impl CustomsTab {
    pub fn code(&self) -> &'static str {
        match self {
            CustomsTab::Dashboard => "dashboard",
            CustomsTab::Import => "import",
            CustomsTab::Export => "export",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            CustomsTab::Dashboard => TextKey::CustomsManagement,
            CustomsTab::Import => TextKey::ImportDetails,
            CustomsTab::Export => TextKey::ExportDetails,
        }
    }

    pub fn all() -> Vec<CustomsTab> {
        vec![CustomsTab::Dashboard, CustomsTab::Import, CustomsTab::Export]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }
}

/// Active view of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Procurement(ProcurementTab),
    Logistics(LogisticsTab),
    Warehouse(WarehouseTab),
    Customs(CustomsTab),
}

impl View {
    /// Every registered view, in sidebar order.
    pub fn all() -> Vec<View> {
        let mut views = vec![View::Dashboard];
        for section in Section::all() {
            views.extend(section.views());
        }
        views
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            View::Dashboard => None,
            View::Procurement(_) => Some(Section::Procurement),
            View::Logistics(_) => Some(Section::Logistics),
            View::Warehouse(_) => Some(Section::Warehouse),
            View::Customs(_) => Some(Section::Customs),
        }
    }

    fn subview_code(&self) -> Option<&'static str> {
        match self {
            View::Dashboard => None,
            View::Procurement(tab) => Some(tab.code()),
            View::Logistics(tab) => Some(tab.code()),
            View::Warehouse(tab) => Some(tab.code()),
            View::Customs(tab) => Some(tab.code()),
        }
    }

    pub fn subview_label_key(&self) -> Option<TextKey> {
        match self {
            View::Dashboard => None,
            View::Procurement(tab) => Some(tab.label_key()),
            View::Logistics(tab) => Some(tab.label_key()),
            View::Warehouse(tab) => Some(tab.label_key()),
            View::Customs(tab) => Some(tab.label_key()),
        }
    }

    /// Строковый ключ вида: `dashboard` или `<section>-<subview>`
    pub fn key(&self) -> String {
        match (self.section(), self.subview_code()) {
            (Some(section), Some(subview)) => format!("{}-{}", section.code(), subview),
            _ => "dashboard".to_string(),
        }
    }

    /// Parses a view key.
    ///
    /// A known section prefix is stripped and the remainder resolved by that
    /// section, which falls back to its default subview. Anything else,
    /// including `"dashboard"`, resolves to [`View::Dashboard`].
    pub fn from_key(key: &str) -> View {
        for section in Section::all() {
            let prefix = format!("{}-", section.code());
            if let Some(subview) = key.strip_prefix(prefix.as_str()) {
                return section.view_for(subview);
            }
        }
        View::Dashboard
    }

    /// Breadcrumb title, e.g. `Procurement > Order Analysis`.
    pub fn title(&self, lang: Language) -> String {
        match (self.section(), self.subview_label_key()) {
            (Some(section), Some(subview)) => format!(
                "{} > {}",
                translate(lang, section.label_key()),
                translate(lang, subview)
            ),
            _ => translate(lang, TextKey::Dashboard).to_string(),
        }
    }
}

/// Title for a raw key; keys outside the registry yield [`NOT_AVAILABLE`].
pub fn view_title_for_key(key: &str, lang: Language) -> String {
    View::all()
        .into_iter()
        .find(|view| view.key() == key)
        .map(|view| view.title(lang))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_thirteen_views() {
        assert_eq!(View::all().len(), 13);
    }

    #[test]
    fn test_from_key_dispatches_to_section() {
        assert_eq!(
            View::from_key("procurement-prices"),
            View::Procurement(ProcurementTab::Prices)
        );
        assert_eq!(
            View::from_key("customs-export"),
            View::Customs(CustomsTab::Export)
        );
        assert_eq!(
            View::from_key("logistics-transport"),
            View::Logistics(LogisticsTab::Transport)
        );
    }

    #[test]
    fn test_unknown_prefix_falls_back_to_dashboard() {
        assert_eq!(View::from_key("foo-bar"), View::Dashboard);
        assert_eq!(View::from_key(""), View::Dashboard);
        assert_eq!(View::from_key("dashboard"), View::Dashboard);
        // Без дефиса это не префикс раздела
        assert_eq!(View::from_key("procurement"), View::Dashboard);
    }

    #[test]
    fn test_unknown_subview_uses_section_default() {
        assert_eq!(
            View::from_key("procurement-nope"),
            View::Procurement(ProcurementTab::Orders)
        );
        assert_eq!(
            View::from_key("warehouse-"),
            View::Warehouse(WarehouseTab::Dashboard)
        );
        assert_eq!(
            View::from_key("logistics-x"),
            View::Logistics(LogisticsTab::Reservation)
        );
    }

    #[test]
    fn test_key_roundtrip_for_all_views() {
        for view in View::all() {
            assert_eq!(View::from_key(&view.key()), view);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            View::Procurement(ProcurementTab::Orders).title(Language::En),
            "Procurement > Order Analysis"
        );
        assert_eq!(View::Dashboard.title(Language::En), "Dashboard");
        assert_eq!(
            View::Customs(CustomsTab::Import).title(Language::Tr),
            "Gümrük > İthalat Detayları"
        );
    }

    #[test]
    fn test_title_for_unknown_key_is_not_available() {
        assert_eq!(view_title_for_key("foo-bar", Language::En), NOT_AVAILABLE);
        assert_eq!(
            view_title_for_key("warehouse-inefficiency", Language::En),
            "Warehouse > Inefficiency Costs"
        );
    }
}
