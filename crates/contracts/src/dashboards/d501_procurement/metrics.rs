//! Производные показатели закупок.

use super::dto::{EscalationRecord, OpenOrderRecord, PriceAnalysisRecord};
use crate::enums::{Category, Region};
use serde::{Deserialize, Serialize};

/// Перерасход по количеству и его стоимость
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverBudgetMetrics {
    pub over_qty: f64,
    pub over_impact: f64,
    /// Средняя цена перерасхода; 0 при нулевом перерасходе
    pub over_avg_price: f64,
}

pub fn over_budget_metrics(records: &[PriceAnalysisRecord]) -> OverBudgetMetrics {
    let (over_qty, over_impact) = records
        .iter()
        .map(|r| ((r.actual_qty - r.budget_qty).max(0.0), r.actual_price))
        .filter(|(over, _)| *over > 0.0)
        .fold((0.0, 0.0), |(qty, impact), (over, price)| {
            (qty + over, impact + over * price)
        });

    let over_avg_price = if over_qty > 0.0 {
        over_impact / over_qty
    } else {
        0.0
    };

    OverBudgetMetrics {
        over_qty,
        over_impact,
        over_avg_price,
    }
}

/// Отклонение расходов по категории: факт минус бюджет
pub fn spend_variance(record: &PriceAnalysisRecord) -> f64 {
    record.actual_total - record.budget_total
}

/// Эффект эскалации себестоимости одной позиции
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscalationImpact {
    pub current_total: f64,
    pub new_total: f64,
    pub raw_delta: f64,
    pub energy_delta: f64,
    pub labor_delta: f64,
    /// Положительное значение = рост затрат
    pub impact: f64,
}

pub fn escalation_impact(record: &EscalationRecord) -> EscalationImpact {
    let current_total = record.current.total();
    let new_total = record.new.total();
    EscalationImpact {
        current_total,
        new_total,
        raw_delta: record.new.raw - record.current.raw,
        energy_delta: record.new.energy - record.current.energy,
        labor_delta: record.new.labor - record.current.labor,
        impact: (new_total - current_total) * record.actual_qty,
    }
}

pub fn total_escalation_impact(records: &[EscalationRecord]) -> f64 {
    records.iter().map(|r| escalation_impact(r).impact).sum()
}

/// Отклонение цены в процентах; `None` при нулевом бюджете
pub fn price_diff_percent(actual: f64, budget: f64) -> Option<f64> {
    if budget == 0.0 {
        None
    } else {
        Some((actual - budget) / budget * 100.0)
    }
}

/// Фильтр открытых заказов: регион, затем категория внутри региона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilter {
    pub region: Option<Region>,
    pub category: Option<Category>,
    /// Регион, данные которого сейчас загружаются
    pub pending: Option<Region>,
}

impl OrderFilter {
    /// Начало загрузки региона. Пока она идёт, результаты скрыты.
    pub fn begin_fetch(&mut self, region: Region) {
        self.pending = Some(region);
    }

    /// Завершение загрузки: ожидаемый регион становится выбранным.
    pub fn finish_fetch(&mut self) {
        if let Some(region) = self.pending.take() {
            self.select_region(region);
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Регион, результаты которого можно показывать.
    pub fn visible_region(&self) -> Option<Region> {
        if self.is_fetching() {
            None
        } else {
            self.region
        }
    }

    /// Смена региона всегда сбрасывает категорию.
    pub fn select_region(&mut self, region: Region) {
        self.region = Some(region);
        self.category = None;
    }

    /// Повторный выбор той же категории снимает выбор.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Заказы выбранного региона; пусто, если регион не выбран.
    pub fn filter_orders<'a>(&self, orders: &'a [OpenOrderRecord]) -> Vec<&'a OpenOrderRecord> {
        match self.region {
            Some(region) => orders
                .iter()
                .filter(|o| o.origin == region.origin())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Заказы выбранного региона и выбранной категории.
    pub fn category_details<'a>(
        &self,
        orders: &'a [OpenOrderRecord],
    ) -> Vec<&'a OpenOrderRecord> {
        match self.category {
            Some(category) => self
                .filter_orders(orders)
                .into_iter()
                .filter(|o| o.category == category)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Количество заказов по категориям среди отфильтрованных
pub fn orders_per_category(orders: &[&OpenOrderRecord]) -> Vec<(Category, usize)> {
    Category::all()
        .into_iter()
        .map(|c| (c, orders.iter().filter(|o| o.category == c).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d501_procurement::dto::CostBreakdown;
    use crate::dashboards::d501_procurement::sample::sample_dataset;

    fn record(budget_qty: f64, actual_qty: f64, actual_price: f64) -> PriceAnalysisRecord {
        PriceAnalysisRecord {
            category: Category::RawMaterial,
            budget_qty,
            actual_qty,
            budget_price: actual_price,
            actual_price,
            budget_total: budget_qty * actual_price,
            actual_total: actual_qty * actual_price,
        }
    }

    #[test]
    fn test_over_budget_single_record() {
        let m = over_budget_metrics(&[record(1000.0, 1200.0, 12.0)]);
        assert_eq!(m.over_qty, 200.0);
        assert_eq!(m.over_impact, 2400.0);
        assert_eq!(m.over_avg_price, 12.0);
    }

    #[test]
    fn test_over_budget_ignores_under_budget_lines() {
        let m = over_budget_metrics(&[record(500.0, 450.0, 48.0), record(100.0, 100.0, 20.0)]);
        assert_eq!(m, OverBudgetMetrics::default());
    }

    #[test]
    fn test_over_budget_sample_data() {
        let data = sample_dataset();
        let m = over_budget_metrics(&data.price_analysis);
        // 200 + 200 + 10
        assert_eq!(m.over_qty, 410.0);
        // 200*12 + 200*5.5 + 10*22
        assert!((m.over_impact - 3720.0).abs() < 1e-9);
        assert!((m.over_avg_price - 3720.0 / 410.0).abs() < 1e-9);
    }

    #[test]
    fn test_spend_variance_sign() {
        let data = sample_dataset();
        assert!(spend_variance(&data.price_analysis[0]) > 0.0);
        assert!(spend_variance(&data.price_analysis[1]) < 0.0);
    }

    #[test]
    fn test_escalation_impact() {
        let rec = EscalationRecord {
            item: "Cold Rolled Steel".into(),
            current: CostBreakdown { raw: 8.5, labor: 2.0, energy: 1.0, other: 0.5 },
            new: CostBreakdown { raw: 10.2, labor: 2.2, energy: 1.4, other: 0.5 },
            fx_change: 12.5,
            inflation: 8.2,
            actual_qty: 5000.0,
        };
        let impact = escalation_impact(&rec);
        assert!((impact.current_total - 12.0).abs() < 1e-9);
        assert!((impact.new_total - 14.3).abs() < 1e-9);
        assert!((impact.impact - 11_500.0).abs() < 1e-6);
        assert!((impact.raw_delta - 1.7).abs() < 1e-9);
        assert!(impact.impact > 0.0);
    }

    #[test]
    fn test_total_escalation_impact() {
        let data = sample_dataset();
        // 11500 + 8400 + 9000
        assert!((total_escalation_impact(&data.escalation) - 28_900.0).abs() < 1e-6);
        assert_eq!(total_escalation_impact(&[]), 0.0);
    }

    #[test]
    fn test_price_diff_percent() {
        assert_eq!(price_diff_percent(12.0, 10.0).map(|v| v.round()), Some(20.0));
        assert!(price_diff_percent(9.0, 10.0).unwrap() < 0.0);
        assert_eq!(price_diff_percent(5.0, 0.0), None);
    }

    #[test]
    fn test_filter_without_region_is_empty() {
        let data = sample_dataset();
        let filter = OrderFilter::default();
        assert!(filter.filter_orders(&data.open_orders).is_empty());
    }

    #[test]
    fn test_filter_by_region() {
        let data = sample_dataset();
        let mut filter = OrderFilter::default();
        filter.select_region(Region::India);
        let orders = filter.filter_orders(&data.open_orders);
        assert_eq!(orders.len(), 3);
        assert!(orders.iter().all(|o| o.origin == "India"));

        filter.select_region(Region::Turkey);
        assert_eq!(filter.filter_orders(&data.open_orders).len(), 5);
    }

    #[test]
    fn test_select_region_clears_category() {
        let mut filter = OrderFilter::default();
        filter.select_region(Region::Turkey);
        filter.toggle_category(Category::RawMaterial);
        assert_eq!(filter.category, Some(Category::RawMaterial));

        filter.select_region(Region::India);
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_toggle_category_twice_clears() {
        let mut filter = OrderFilter::default();
        filter.toggle_category(Category::Packaging);
        filter.toggle_category(Category::Packaging);
        assert_eq!(filter.category, None);

        filter.toggle_category(Category::Packaging);
        filter.toggle_category(Category::Mro);
        assert_eq!(filter.category, Some(Category::Mro));
    }

    #[test]
    fn test_toggle_category_twice_keeps_region() {
        let data = sample_dataset();
        let mut filter = OrderFilter::default();
        filter.select_region(Region::Turkey);
        filter.toggle_category(Category::RawMaterial);
        filter.toggle_category(Category::RawMaterial);

        assert_eq!(filter.region, Some(Region::Turkey));
        assert_eq!(filter.category, None);
        assert!(filter.category_details(&data.open_orders).is_empty());
        assert_eq!(filter.filter_orders(&data.open_orders).len(), 5);
    }

    #[test]
    fn test_results_hidden_while_fetching() {
        let mut filter = OrderFilter::default();
        filter.select_region(Region::India);
        filter.toggle_category(Category::Components);

        filter.begin_fetch(Region::Turkey);
        assert!(filter.is_fetching());
        assert_eq!(filter.visible_region(), None);

        filter.finish_fetch();
        assert!(!filter.is_fetching());
        assert_eq!(filter.visible_region(), Some(Region::Turkey));
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_finish_without_fetch_keeps_selection() {
        let mut filter = OrderFilter::default();
        filter.select_region(Region::India);
        filter.toggle_category(Category::Components);
        filter.finish_fetch();
        assert_eq!(filter.region, Some(Region::India));
        assert_eq!(filter.category, Some(Category::Components));
    }

    #[test]
    fn test_category_details() {
        let data = sample_dataset();
        let mut filter = OrderFilter::default();
        filter.select_region(Region::Turkey);
        assert!(filter.category_details(&data.open_orders).is_empty());

        filter.toggle_category(Category::RawMaterial);
        let details = filter.category_details(&data.open_orders);
        let codes: Vec<&str> = details.iter().map(|o| o.po_no.as_str()).collect();
        assert_eq!(codes, vec!["PO-8801", "PO-8812", "PO-8819"]);
    }

    #[test]
    fn test_orders_per_category() {
        let data = sample_dataset();
        let mut filter = OrderFilter::default();
        filter.select_region(Region::India);
        let orders = filter.filter_orders(&data.open_orders);
        let counts = orders_per_category(&orders);
        assert_eq!(
            counts,
            vec![(Category::RawMaterial, 1), (Category::Components, 2)]
        );
    }
}
