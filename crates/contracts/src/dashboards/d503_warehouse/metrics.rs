use super::dto::{OvertimeRecord, StockRecord};

pub fn total_stock(records: &[StockRecord]) -> f64 {
    records.iter().map(|r| r.quantity).sum()
}

/// Доля категории в общем запасе, %; `None` при пустом складе
pub fn stock_share(record: &StockRecord, total: f64) -> Option<f64> {
    if total == 0.0 {
        None
    } else {
        Some(record.quantity / total * 100.0)
    }
}

pub fn total_overtime(records: &[OvertimeRecord]) -> f64 {
    records.iter().map(|r| r.hours).sum()
}

/// День с максимумом сверхурочных; при равенстве берётся первый
pub fn peak_overtime_day(records: &[OvertimeRecord]) -> Option<&OvertimeRecord> {
    records.iter().fold(None, |best: Option<&OvertimeRecord>, r| match best {
        Some(b) if b.hours >= r.hours => Some(b),
        _ => Some(r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d503_warehouse::dto::StockCategory;
    use crate::dashboards::d503_warehouse::sample::sample_dataset;

    #[test]
    fn test_stock_totals_and_share() {
        let data = sample_dataset();
        let total = total_stock(&data.stock);
        assert_eq!(total, 12_520.0);
        let share = stock_share(&data.stock[0], total).unwrap();
        assert!((share - 6800.0 / 12_520.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stock_share_of_empty_warehouse() {
        let record = StockRecord {
            category: StockCategory::Wip,
            quantity: 0.0,
        };
        assert_eq!(stock_share(&record, 0.0), None);
    }

    #[test]
    fn test_overtime() {
        let data = sample_dataset();
        assert_eq!(total_overtime(&data.overtime), 265.0);
        assert_eq!(peak_overtime_day(&data.overtime).map(|r| r.day.as_str()), Some("Fri"));
        assert_eq!(peak_overtime_day(&[]), None);
    }

    #[test]
    fn test_peak_day_tie_keeps_first() {
        let records = vec![
            OvertimeRecord { day: "Mon".into(), hours: 10.0 },
            OvertimeRecord { day: "Tue".into(), hours: 10.0 },
        ];
        assert_eq!(peak_overtime_day(&records).map(|r| r.day.as_str()), Some("Mon"));
    }
}
