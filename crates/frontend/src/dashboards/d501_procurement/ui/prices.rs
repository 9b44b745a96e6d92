use crate::shared::components::{Bar, IndicatorStatus, StatCard, ValueFormat};
use crate::shared::format::format_money;
use crate::shared::insights::InsightPanel;
use contracts::dashboards::d501_procurement::dto::PriceAnalysisRecord;
use contracts::dashboards::d501_procurement::metrics::{over_budget_metrics, spend_variance};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PricesTab(
    #[prop(into)] lang: Signal<Language>,
    price_analysis: Vec<PriceAnalysisRecord>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    let over = over_budget_metrics(&price_analysis);
    let insight_data = price_analysis.clone();
    let bar_rows = price_analysis.clone();
    let max_total = price_analysis
        .iter()
        .flat_map(|r| [r.budget_total, r.actual_total])
        .fold(0.0, f64::max);
    let over_status = if over.over_qty > 0.0 {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Good
    };

    view! {
        <div class="stat-grid">
            <StatCard
                label=Signal::derive(move || t(TextKey::OverBudgetQty).to_string())
                icon_name="package"
                value=Signal::derive(move || Some(over.over_qty))
                format=ValueFormat::Integer
                status=over_status
            />
            <StatCard
                label=Signal::derive(move || t(TextKey::OverBudgetImpact).to_string())
                icon_name="dollar-sign"
                value=Signal::derive(move || Some(over.over_impact))
                format=ValueFormat::Money
                status=over_status
            />
            <StatCard
                label=Signal::derive(move || t(TextKey::OverBudgetAvgPrice).to_string())
                icon_name="trending-up"
                value=Signal::derive(move || Some(over.over_avg_price))
                format=ValueFormat::Number { decimals: 2 }
            />
        </div>

        <div class="dashboard-grid">
            <Card>
                <h3 class="card__title">
                    {move || format!("{} / {}", t(TextKey::BudgetLabel), t(TextKey::ActualLabel))}
                </h3>
                {bar_rows.iter().map(|r| {
                    let category = r.category;
                    view! {
                        <Bar
                            label=Signal::derive(move || format!("{} {}", t(category.label_key()), t(TextKey::BudgetLabel)))
                            value=r.budget_total
                            max=max_total
                            caption=format_money(r.budget_total)
                            tone="muted"
                        />
                        <Bar
                            label=Signal::derive(move || format!("{} {}", t(category.label_key()), t(TextKey::ActualLabel)))
                            value=r.actual_total
                            max=max_total
                            caption=format_money(r.actual_total)
                            tone={if r.actual_total > r.budget_total { "warning" } else { "primary" }}
                        />
                    }
                }).collect_view()}
            </Card>

            <Card>
                <h3 class="card__title">{move || t(TextKey::PriceAnalysis)}</h3>
                {price_analysis.iter().map(|r| {
                    let category = r.category;
                    let variance = spend_variance(r);
                    let budget_total = r.budget_total;
                    view! {
                        <div class="list-row">
                            <div class="list-row__title">{move || t(category.label_key())}</div>
                            <div class="list-row__values">
                                <div class:text-error={variance > 0.0} class:text-success={variance <= 0.0}>
                                    {format_money(r.actual_total)}
                                </div>
                                <div class="list-row__hint">
                                    {move || format!("{}: {}", t(TextKey::BudgetLabel), format_money(budget_total))}
                                </div>
                                <div class="list-row__hint">
                                    {move || format!("{}: {}", t(TextKey::Variance), format_money(variance))}
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </Card>
        </div>

        <InsightPanel context="Price & Qty Audit".to_string() data=insight_data lang=lang />
    }
}
