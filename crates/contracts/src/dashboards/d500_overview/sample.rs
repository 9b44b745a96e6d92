use super::dto::*;

const CUMULATIVE_SAVINGS: [f64; 12] = [
    3_000.0, 7_500.0, 12_500.0, 18_000.0, 24_500.0, 32_000.0, 41_000.0, 52_000.0, 65_000.0,
    80_000.0, 98_000.0, 120_000.0,
];

pub fn sample_dataset() -> OverviewDataset {
    let price_trend = [
        ("Jan", 12.5),
        ("Feb", 12.8),
        ("Mar", 12.2),
        ("Apr", 13.1),
        ("May", 13.6),
    ]
    .into_iter()
    .map(|(month, price)| PricePoint {
        month: month.to_string(),
        price,
        budget: 12.0,
    })
    .collect();

    let activity = [
        ("Mon", 400.0, 240.0),
        ("Tue", 300.0, 456.0),
        ("Wed", 200.0, 980.0),
        ("Thu", 278.0, 390.0),
        ("Fri", 189.0, 480.0),
    ]
    .into_iter()
    .map(|(day, inbound, outbound)| ActivityRecord {
        day: day.to_string(),
        inbound,
        outbound,
    })
    .collect();

    // Затраты растут на 200 в месяц начиная с 20 200
    let projection = CUMULATIVE_SAVINGS
        .iter()
        .enumerate()
        .map(|(i, savings)| ProjectionPoint {
            month: format!("M{}", i + 1),
            cumulative_cost: 20_200.0 + 200.0 * i as f64,
            cumulative_savings: *savings,
        })
        .collect();

    OverviewDataset {
        budget_used: 78.0,
        price_trend,
        activity,
        projection,
    }
}
