use crate::shared::format::{format_money_decimals, format_number};
use crate::shared::insights::InsightPanel;
use contracts::dashboards::d501_procurement::dto::EscalationRecord;
use contracts::dashboards::d501_procurement::metrics::{escalation_impact, total_escalation_impact};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use leptos::prelude::*;
use thaw::*;

/// Дельта компонента себестоимости: `+0.35$`
fn format_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}$", format_number(value, 2))
    } else {
        format!("{}$", format_number(value, 2))
    }
}

/// Эффект на бюджет: рост затрат уменьшает бюджет, `-$11,500.00`
fn format_budget_effect(impact: f64, decimals: usize) -> String {
    format_money_decimals(-impact, decimals)
}

#[component]
pub fn EscalationTab(
    #[prop(into)] lang: Signal<Language>,
    escalation: Vec<EscalationRecord>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let total_impact = total_escalation_impact(&escalation);
    let insight_data = escalation.clone();

    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3 class="card__title">{move || t(TextKey::EscalationAnalysis)}</h3>
                <Badge
                    appearance=BadgeAppearance::Tint
                    color={if total_impact > 0.0 { BadgeColor::Danger } else { BadgeColor::Success }}
                >
                    {move || format!("{}: {}", t(TextKey::TotalImpact), format_budget_effect(total_impact, 0))}
                </Badge>
            </Flex>
            <div class="table-scroll">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=180.0>{move || t(TextKey::Item)}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || t(TextKey::CurrentCost)}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || t(TextKey::FxChange)}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || t(TextKey::Inflation)}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || t(TextKey::RawDelta)}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || t(TextKey::EnergyDelta)}</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>{move || t(TextKey::LaborDelta)}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || t(TextKey::NewCost)}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || t(TextKey::BudgetImpact)}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {escalation.into_iter().map(|row| {
                            let impact = escalation_impact(&row);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout><span class="strong">{row.item}</span></TableCellLayout></TableCell>
                                    <TableCell class="text-right mono">{format!("${}", format_number(impact.current_total, 2))}</TableCell>
                                    <TableCell class="text-right mono text-warning">{format!("+{}%", format_number(row.fx_change, 1))}</TableCell>
                                    <TableCell class="text-right mono text-warning">{format!("+{}%", format_number(row.inflation, 1))}</TableCell>
                                    <TableCell class="text-right">{format_delta(impact.raw_delta)}</TableCell>
                                    <TableCell class="text-right">{format_delta(impact.energy_delta)}</TableCell>
                                    <TableCell class="text-right">{format_delta(impact.labor_delta)}</TableCell>
                                    <TableCell class="text-right mono strong">{format!("${}", format_number(impact.new_total, 2))}</TableCell>
                                    <TableCell class="text-right mono">
                                        <span class:text-error={impact.impact > 0.0} class:text-success={impact.impact < 0.0}>
                                            {format_budget_effect(impact.impact, 2)}
                                        </span>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </Card>

        <InsightPanel context="Cost Escalation Analysis".to_string() data=insight_data lang=lang />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(0.35), "+0.35$");
        assert_eq!(format_delta(0.0), "+0.00$");
        assert_eq!(format_delta(-1.5), "-1.50$");
    }

    #[test]
    fn test_budget_effect_sign() {
        // Рост затрат
        assert_eq!(format_budget_effect(11_500.0, 2), "-$11,500.00");
        // Снижение затрат не даёт "-$-"
        assert_eq!(format_budget_effect(-1_234.0, 2), "$1,234.00");
        assert_eq!(format_budget_effect(0.0, 2), "$0.00");
        assert_eq!(format_budget_effect(28_900.0, 0), "-$28,900");
    }
}
