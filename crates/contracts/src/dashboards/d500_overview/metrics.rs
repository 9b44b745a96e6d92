use super::dto::{ActivityRecord, PricePoint, ProjectionPoint};
use crate::dashboards::d501_procurement::metrics::price_diff_percent;

/// Отклонение последней цены от бюджета
#[derive(Debug, Clone, PartialEq)]
pub struct PriceVariance {
    pub month: String,
    pub price: f64,
    pub budget: f64,
    pub delta: f64,
    /// `None` при нулевом бюджете
    pub percent: Option<f64>,
}

pub fn latest_price_variance(trend: &[PricePoint]) -> Option<PriceVariance> {
    trend.last().map(|p| PriceVariance {
        month: p.month.clone(),
        price: p.price,
        budget: p.budget,
        delta: p.price - p.budget,
        percent: price_diff_percent(p.price, p.budget),
    })
}

/// Первый месяц, где накопленная экономия покрывает накопленные затраты
pub fn break_even_month(projection: &[ProjectionPoint]) -> Option<&ProjectionPoint> {
    projection
        .iter()
        .find(|p| p.cumulative_savings >= p.cumulative_cost)
}

/// Приход минус расход за период
pub fn net_stock_movement(activity: &[ActivityRecord]) -> f64 {
    activity.iter().map(|a| a.inbound - a.outbound).sum()
}

/// Наибольшее значение для масштабирования полос
pub fn activity_peak(activity: &[ActivityRecord]) -> f64 {
    activity
        .iter()
        .flat_map(|a| [a.inbound, a.outbound])
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d500_overview::sample::sample_dataset;

    #[test]
    fn test_latest_price_variance() {
        let data = sample_dataset();
        let v = latest_price_variance(&data.price_trend).unwrap();
        assert_eq!(v.month, "May");
        assert!((v.delta - 1.6).abs() < 1e-9);
        assert!((v.percent.unwrap() - 1.6 / 12.0 * 100.0).abs() < 1e-9);
        assert_eq!(latest_price_variance(&[]), None);
    }

    #[test]
    fn test_break_even_on_sample() {
        let data = sample_dataset();
        assert_eq!(data.projection.len(), 12);
        assert_eq!(data.projection[11].cumulative_cost, 22_400.0);
        let month = break_even_month(&data.projection).map(|p| p.month.as_str());
        assert_eq!(month, Some("M5"));
    }

    #[test]
    fn test_break_even_never_reached() {
        let projection = vec![ProjectionPoint {
            month: "M1".into(),
            cumulative_cost: 100.0,
            cumulative_savings: 99.0,
        }];
        assert_eq!(break_even_month(&projection), None);
    }

    #[test]
    fn test_net_stock_movement() {
        let data = sample_dataset();
        // 1367 in, 2546 out
        assert_eq!(net_stock_movement(&data.activity), -1179.0);
        assert_eq!(activity_peak(&data.activity), 980.0);
        assert_eq!(activity_peak(&[]), 0.0);
    }
}
