use super::dto::*;
use crate::enums::Category;

fn price(
    category: Category,
    budget_qty: f64,
    actual_qty: f64,
    budget_price: f64,
    actual_price: f64,
) -> PriceAnalysisRecord {
    PriceAnalysisRecord {
        category,
        budget_qty,
        actual_qty,
        budget_price,
        actual_price,
        budget_total: budget_qty * budget_price,
        actual_total: actual_qty * actual_price,
    }
}

fn escalation(
    item: &str,
    current: [f64; 4],
    new: [f64; 4],
    fx_change: f64,
    inflation: f64,
    actual_qty: f64,
) -> EscalationRecord {
    let breakdown = |[raw, labor, energy, other]: [f64; 4]| CostBreakdown {
        raw,
        labor,
        energy,
        other,
    };
    EscalationRecord {
        item: item.to_string(),
        current: breakdown(current),
        new: breakdown(new),
        fx_change,
        inflation,
        actual_qty,
    }
}

fn supplier(name: &str, otd: u32, quality: u32, price_idx: f64, risk: RiskLevel, volume: &str) -> SupplierRecord {
    SupplierRecord {
        name: name.to_string(),
        otd,
        quality,
        price_idx,
        risk,
        volume: volume.to_string(),
    }
}

fn bom(row: [&str; 7]) -> BomErrorRecord {
    let [parent_item, component, error_code, error_detail, impacted_req, impacted_po, action] = row;
    BomErrorRecord {
        parent_item: parent_item.to_string(),
        component: component.to_string(),
        error_code: error_code.to_string(),
        error_detail: error_detail.to_string(),
        impacted_req: impacted_req.to_string(),
        impacted_po: impacted_po.to_string(),
        action: action.to_string(),
    }
}

fn summary(category: Category, total_orders: u32, total_value: f64, trend: &str) -> AnnualSummaryRecord {
    AnnualSummaryRecord {
        category,
        total_orders,
        total_value,
        trend: trend.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    po_no: &str,
    origin: &str,
    category: Category,
    item: &str,
    item_code: &str,
    (actual_qty, budget_qty): (f64, f64),
    (actual_price, budget_price): (f64, f64),
    delivery_date: &str,
    status: OrderStatus,
    pallets: u32,
) -> OpenOrderRecord {
    OpenOrderRecord {
        po_no: po_no.to_string(),
        origin: origin.to_string(),
        category,
        item: item.to_string(),
        item_code: item_code.to_string(),
        actual_qty,
        budget_qty,
        actual_price,
        budget_price,
        delivery_date: delivery_date.to_string(),
        status,
        pallets,
    }
}

/// Compiled-in procurement sample data
pub fn sample_dataset() -> ProcurementDataset {
    use Category::*;
    use OrderStatus::*;

    ProcurementDataset {
        price_analysis: vec![
            price(RawMaterial, 1000.0, 1200.0, 10.0, 12.0),
            price(Components, 500.0, 450.0, 50.0, 48.0),
            price(Packaging, 2000.0, 2200.0, 5.0, 5.5),
            price(Mro, 100.0, 110.0, 20.0, 22.0),
        ],
        escalation: vec![
            escalation("Cold Rolled Steel", [8.5, 2.0, 1.0, 0.5], [10.2, 2.2, 1.4, 0.5], 12.5, 8.2, 5000.0),
            escalation("Electric Motor V2", [45.0, 15.0, 5.0, 5.0], [48.0, 16.5, 7.0, 5.5], 4.2, 6.5, 1200.0),
            escalation("Alu Ingot", [2.8, 0.5, 0.4, 0.3], [3.4, 0.6, 0.6, 0.3], 8.1, 7.0, 10000.0),
        ],
        suppliers: vec![
            supplier("Anatolia Steel Co.", 94, 98, 1.05, RiskLevel::Low, "$450k"),
            supplier("Bharat Motors Ltd", 88, 92, 0.98, RiskLevel::Medium, "$320k"),
            supplier("Global Pack India", 99, 99, 1.02, RiskLevel::Low, "$120k"),
            supplier("Euro Seals TR", 65, 85, 1.12, RiskLevel::High, "$45k"),
        ],
        bom_errors: vec![
            bom([
                "XC-900 Main Assy",
                "Control Board X8",
                "Qty Mismatch",
                "MRP requires 1.2 but PO only covers 1.0",
                "REQ-442",
                "PO-8801",
                "Update PO",
            ]),
            bom([
                "Gearbox Pro",
                "Hydraulic Seal S2",
                "Lead Time Gap",
                "Delivery date 2025-05-22 is after production start",
                "REQ-450",
                "PO-8815",
                "Expedite",
            ]),
            bom([
                "Motor Unit X1",
                "Copper Wire RM",
                "Invalid HS Code",
                "HS Code 7408.11 conflicts with import regulations",
                "REQ-881",
                "PO-4450",
                "Review Docs",
            ]),
        ],
        annual_summary: vec![
            summary(RawMaterial, 145, 1_250_000.0, "+5%"),
            summary(Components, 88, 840_000.0, "-2%"),
            summary(Packaging, 210, 120_000.0, "+12%"),
            summary(Mro, 56, 45_000.0, "Stable"),
        ],
        open_orders: vec![
            order("PO-8801", "Turkey", RawMaterial, "Cold Rolled Steel", "RM-STEEL-01", (1000.0, 1000.0), (12.5, 11.0), "2025-05-15", Delayed, 12),
            order("PO-4420", "India", Components, "Electric Motor V2", "COMP-MOT-V2", (5000.0, 4800.0), (2.1, 2.1), "2025-05-28", OnTime, 4),
            order("PO-8805", "Turkey", Packaging, "Euro Pallets", "PACK-PAL-09", (10000.0, 10000.0), (0.45, 0.50), "2025-05-25", OnTime, 22),
            order("PO-4432", "India", Components, "Control Board X", "COMP-BRD-X8", (200.0, 200.0), (48.0, 42.0), "2025-05-10", Delayed, 1),
            order("PO-8812", "Turkey", RawMaterial, "Alu Ingot", "RM-ALU-04", (2500.0, 2000.0), (3.2, 3.0), "2025-06-02", OnTime, 18),
            order("PO-4450", "India", RawMaterial, "Copper Wire", "RM-COP-99", (800.0, 800.0), (9.1, 8.5), "2025-05-30", OnTime, 3),
            order("PO-8815", "Turkey", Components, "Hydraulic Seal", "COMP-HYD-S2", (300.0, 300.0), (15.5, 14.0), "2025-05-22", OnTime, 2),
            order("PO-8819", "Turkey", RawMaterial, "Polyamide Granules", "RM-POLY-G1", (5000.0, 4500.0), (4.8, 4.5), "2025-05-29", OnTime, 10),
        ],
    }
}
