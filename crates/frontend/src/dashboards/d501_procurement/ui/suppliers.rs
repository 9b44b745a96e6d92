use crate::shared::format::format_number;
use crate::shared::insights::InsightPanel;
use contracts::dashboards::d501_procurement::dto::{RiskLevel, SupplierRecord};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use leptos::prelude::*;
use thaw::*;

fn risk_color(risk: RiskLevel) -> BadgeColor {
    match risk {
        RiskLevel::Low => BadgeColor::Success,
        RiskLevel::Medium => BadgeColor::Warning,
        RiskLevel::High => BadgeColor::Danger,
    }
}

#[component]
pub fn SuppliersTab(
    #[prop(into)] lang: Signal<Language>,
    suppliers: Vec<SupplierRecord>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let insight_data = suppliers.clone();

    view! {
        <Card>
            <h3 class="card__title">{move || t(TextKey::SupplierPerformance)}</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=200.0>{move || t(TextKey::Supplier)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::OnTimeDelivery)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::QualityScore)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::PriceIndex)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::RiskLevel)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Volume)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {suppliers.into_iter().map(|s| {
                        let risk = s.risk;
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout><span class="strong">{s.name}</span></TableCellLayout></TableCell>
                                <TableCell class="mono text-info">{format!("{}%", s.otd)}</TableCell>
                                <TableCell class="mono text-success">{format!("{}%", s.quality)}</TableCell>
                                <TableCell class="mono">{format_number(s.price_idx, 2)}</TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Badge appearance=BadgeAppearance::Tint color=risk_color(risk)>
                                            {move || t(risk.label_key())}
                                        </Badge>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell class="text-right strong">{s.volume}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>

        <InsightPanel context="Supplier Risk Matrix".to_string() data=insight_data lang=lang />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_color() {
        assert!(matches!(risk_color(RiskLevel::Low), BadgeColor::Success));
        assert!(matches!(risk_color(RiskLevel::Medium), BadgeColor::Warning));
        assert!(matches!(risk_color(RiskLevel::High), BadgeColor::Danger));
    }
}
