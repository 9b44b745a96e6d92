use super::dto::*;

fn import(row: [&str; 6], value: f64, tax: f64) -> ImportDeclaration {
    let [id, product, hs_code, origin, carrier, status] = row;
    ImportDeclaration {
        id: id.to_string(),
        product: product.to_string(),
        hs_code: hs_code.to_string(),
        origin: origin.to_string(),
        carrier: carrier.to_string(),
        value,
        tax,
        status: status.to_string(),
    }
}

fn export(row: [&str; 6], value: f64) -> ExportDeclaration {
    let [id, product, hs_code, destination, carrier, status] = row;
    ExportDeclaration {
        id: id.to_string(),
        product: product.to_string(),
        hs_code: hs_code.to_string(),
        destination: destination.to_string(),
        carrier: carrier.to_string(),
        value,
        duty: 0.0,
        status: status.to_string(),
    }
}

pub fn sample_dataset() -> CustomsDataset {
    CustomsDataset {
        imports: vec![
            import(["IMP-2201", "Precision Gears", "8483.40", "Germany", "Maersk Line", "Cleared"], 45_000.0, 8_100.0),
            import(["IMP-2205", "Sensors V2", "8526.10", "Taiwan", "MSC Mediterranean", "Review"], 12_000.0, 2_160.0),
            import(["IMP-2209", "Motor Hubs", "8412.21", "China", "CMA CGM", "Exam Requested"], 85_000.0, 15_300.0),
            import(["IMP-2212", "Alu Housing", "7616.99", "South Korea", "Evergreen", "Cleared"], 5_000.0, 900.0),
        ],
        exports: vec![
            export(["EXP-9901", "XC-900 Assy", "8407.34", "USA", "DHL Global", "Shipped"], 120_000.0),
            export(["EXP-9904", "Gearbox Pro", "8483.40", "France", "FedEx Trade", "Documentation"], 42_000.0),
            export(["EXP-9910", "Hydraulic P3", "8413.50", "Japan", "NYK Line", "Cleared"], 95_000.0),
        ],
    }
}
