use super::dto::UtilizationRecord;

pub fn total_shipments(records: &[UtilizationRecord]) -> u32 {
    records.iter().map(|r| r.count).sum()
}

/// Средняя загрузка, взвешенная по числу отправок; 0 без отправок
pub fn weighted_load_factor(records: &[UtilizationRecord]) -> f64 {
    let total = total_shipments(records);
    if total == 0 {
        return 0.0;
    }
    let weighted: f64 = records
        .iter()
        .map(|r| r.load_factor * r.count as f64)
        .sum();
    weighted / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d502_logistics::sample::sample_dataset;

    #[test]
    fn test_totals_on_sample() {
        let data = sample_dataset();
        assert_eq!(total_shipments(&data.utilization), 44);
        // (88*12 + 95*8 + 72*24) / 44
        let expected = (1056.0 + 760.0 + 1728.0) / 44.0;
        assert!((weighted_load_factor(&data.utilization) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_load_factor_without_shipments() {
        assert_eq!(weighted_load_factor(&[]), 0.0);
    }
}
