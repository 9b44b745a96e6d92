use super::dto::*;

pub fn sample_dataset() -> WarehouseDataset {
    let overtime = [
        ("Mon", 42.0),
        ("Tue", 38.0),
        ("Wed", 55.0),
        ("Thu", 22.0),
        ("Fri", 68.0),
        ("Sat", 40.0),
    ]
    .into_iter()
    .map(|(day, hours)| OvertimeRecord {
        day: day.to_string(),
        hours,
    })
    .collect();

    let stock = [
        (StockCategory::FinishedGoods, 6800.0),
        (StockCategory::RawMaterial, 4200.0),
        (StockCategory::Wip, 1100.0),
        (StockCategory::Packaging, 420.0),
    ]
    .into_iter()
    .map(|(category, quantity)| StockRecord { category, quantity })
    .collect();

    WarehouseDataset { overtime, stock }
}
