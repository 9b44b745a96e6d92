use super::dto::*;

fn utilization(shipment_type: ShipmentType, load_factor: f64, count: u32) -> UtilizationRecord {
    UtilizationRecord {
        shipment_type,
        load_factor,
        count,
    }
}

fn shipment(
    id: &str,
    route: &str,
    shipment_type: ShipmentType,
    vehicle: &str,
    load: f64,
    eta: &str,
) -> ShipmentRecord {
    ShipmentRecord {
        id: id.to_string(),
        route: route.to_string(),
        shipment_type,
        vehicle: vehicle.to_string(),
        load,
        eta: eta.to_string(),
    }
}

pub fn sample_dataset() -> LogisticsDataset {
    use ShipmentType::*;

    LogisticsDataset {
        utilization: vec![
            utilization(Import, 88.0, 12),
            utilization(Export, 95.0, 8),
            utilization(Local, 72.0, 24),
        ],
        shipments: vec![
            shipment("TRK-9001", "Munich -> Istanbul", Import, "Container Truck", 92.0, "2025-05-24"),
            shipment("SHP-4421", "Istanbul -> New York", Export, "Vessel MSC Ambra", 98.0, "2025-06-12"),
            shipment("LCL-1022", "Gebze -> Ankara", Local, "Box Truck", 65.0, "2025-05-22"),
        ],
    }
}
