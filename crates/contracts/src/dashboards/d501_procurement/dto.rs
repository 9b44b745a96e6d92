use crate::enums::Category;
use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

/// Budget vs actual for one purchase category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysisRecord {
    pub category: Category,
    pub budget_qty: f64,
    pub actual_qty: f64,
    pub budget_price: f64,
    pub actual_price: f64,
    pub budget_total: f64,
    pub actual_total: f64,
}

/// Unit cost split into its drivers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub raw: f64,
    pub labor: f64,
    pub energy: f64,
    pub other: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.raw + self.labor + self.energy + self.other
    }
}

/// Current vs escalated unit cost of one purchased item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRecord {
    pub item: String,
    pub current: CostBreakdown,
    pub new: CostBreakdown,
    /// FX change, %
    pub fx_change: f64,
    /// Inflation, %
    pub inflation: f64,
    pub actual_qty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label_key(&self) -> TextKey {
        match self {
            RiskLevel::Low => TextKey::RiskLow,
            RiskLevel::Medium => TextKey::RiskMedium,
            RiskLevel::High => TextKey::RiskHigh,
        }
    }
}

/// Supplier scorecard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub name: String,
    /// On-time delivery, %
    pub otd: u32,
    /// Quality score, %
    pub quality: u32,
    /// Price index relative to market (1.0 = market)
    pub price_idx: f64,
    pub risk: RiskLevel,
    pub volume: String,
}

/// BOM / MRP conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomErrorRecord {
    pub parent_item: String,
    pub component: String,
    pub error_code: String,
    pub error_detail: String,
    pub impacted_req: String,
    pub impacted_po: String,
    pub action: String,
}

/// Annual order totals per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummaryRecord {
    pub category: Category,
    pub total_orders: u32,
    pub total_value: f64,
    pub trend: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    OnTime,
    Delayed,
}

impl OrderStatus {
    pub fn label_key(&self) -> TextKey {
        match self {
            OrderStatus::OnTime => TextKey::OnTime,
            OrderStatus::Delayed => TextKey::DelayedStatus,
        }
    }
}

/// Open purchase order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrderRecord {
    pub po_no: String,
    /// Country of origin, matched against [`crate::enums::Region::origin`]
    pub origin: String,
    pub category: Category,
    pub item: String,
    pub item_code: String,
    pub actual_qty: f64,
    pub budget_qty: f64,
    pub actual_price: f64,
    pub budget_price: f64,
    /// Format "YYYY-MM-DD"
    pub delivery_date: String,
    pub status: OrderStatus,
    pub pallets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementDataset {
    pub price_analysis: Vec<PriceAnalysisRecord>,
    pub escalation: Vec<EscalationRecord>,
    pub suppliers: Vec<SupplierRecord>,
    pub bom_errors: Vec<BomErrorRecord>,
    pub annual_summary: Vec<AnnualSummaryRecord>,
    pub open_orders: Vec<OpenOrderRecord>,
}
