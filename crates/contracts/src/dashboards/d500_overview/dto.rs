use serde::{Deserialize, Serialize};

/// Фактическая цена за единицу против бюджетной за месяц
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: f64,
    pub budget: f64,
}

/// Складское движение за день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub day: String,
    pub inbound: f64,
    pub outbound: f64,
}

/// Точка накопительной проекции затрат и экономии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: String,
    pub cumulative_cost: f64,
    pub cumulative_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewDataset {
    /// Использование бюджета, %
    pub budget_used: f64,
    pub price_trend: Vec<PricePoint>,
    pub activity: Vec<ActivityRecord>,
    pub projection: Vec<ProjectionPoint>,
}
