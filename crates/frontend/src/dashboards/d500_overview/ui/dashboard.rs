use crate::shared::components::{Bar, IndicatorStatus, StatCard, ValueFormat};
use crate::shared::format::{format_money, format_number, format_optional, format_signed_percent};
use crate::shared::icons::icon;
use crate::shared::insights::InsightPanel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d500_overview::OverviewDataset;
use contracts::dashboards::d500_overview::metrics::{
    activity_peak, break_even_month, latest_price_variance, net_stock_movement,
};
use contracts::enums::{Language, Region};
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::View;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OverviewDashboard(
    #[prop(into)] lang: Signal<Language>,
    data: OverviewDataset,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    let budget_used = data.budget_used;
    let variance = latest_price_variance(&data.price_trend);
    let break_even = break_even_month(&data.projection).map(|p| p.month.clone());
    let net_movement = net_stock_movement(&data.activity);
    let peak = activity_peak(&data.activity);
    let price_max = data
        .price_trend
        .iter()
        .flat_map(|p| [p.price, p.budget])
        .fold(0.0, f64::max);

    let variance_status = match variance.as_ref().map(|v| v.delta) {
        Some(d) if d > 0.0 => IndicatorStatus::Bad,
        Some(_) => IndicatorStatus::Good,
        None => IndicatorStatus::Neutral,
    };
    let variance_subtitle = variance.as_ref().map(|v| {
        format!(
            "{} {} / {}",
            v.month,
            format_optional(v.percent, format_signed_percent),
            format_number(v.budget, 1)
        )
    });
    let break_even_label = break_even.clone();

    let audit_data = serde_json::json!({
        "regions": Region::all().iter().map(|r| r.origin()).collect::<Vec<_>>(),
        "metrics": "Inter-connected",
    });

    view! {
        <PageFrame view_key=View::Dashboard.key() category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{move || t(TextKey::Dashboard)}</h2>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label=Signal::derive(move || t(TextKey::BudgetUtilization).to_string())
                        icon_name="dollar-sign"
                        value=Signal::derive(move || Some(budget_used))
                        format=ValueFormat::Percent { decimals: 0 }
                        status={if budget_used > 90.0 { IndicatorStatus::Warning } else { IndicatorStatus::Good }}
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::UnitPriceVariance).to_string())
                        icon_name="trending-up"
                        value=Signal::derive({
                            let delta = variance.as_ref().map(|v| v.delta);
                            move || delta
                        })
                        format=ValueFormat::Number { decimals: 1 }
                        status=variance_status
                        subtitle=Signal::derive(move || variance_subtitle.clone())
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::NetStockMovement).to_string())
                        icon_name="package"
                        value=Signal::derive(move || Some(net_movement))
                        format=ValueFormat::Integer
                        status={if net_movement < 0.0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral }}
                    />
                    <div class="stat-card">
                        <div class="stat-card__icon">{icon("clock")}</div>
                        <div class="stat-card__content">
                            <div class="stat-card__label">{move || t(TextKey::BreakEven)}</div>
                            <div class="stat-card__value">
                                {move || break_even_label.clone().unwrap_or_else(|| t(TextKey::BreakEvenNotReached).to_string())}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="dashboard-grid">
                    <Card>
                        <h3 class="card__title">{move || t(TextKey::UnitPriceVariance)}</h3>
                        {data.price_trend.iter().map(|p| {
                            let month = p.month.clone();
                            let budget_month = p.month.clone();
                            view! {
                                <Bar
                                    label=Signal::derive(move || format!("{} {}", month, t(TextKey::CurrentPrice)))
                                    value=p.price
                                    max=price_max
                                    caption=format_number(p.price, 1)
                                    tone={if p.price > p.budget { "warning" } else { "primary" }}
                                />
                                <Bar
                                    label=Signal::derive(move || format!("{} {}", budget_month, t(TextKey::Target)))
                                    value=p.budget
                                    max=price_max
                                    caption=format_number(p.budget, 1)
                                    tone="muted"
                                />
                            }
                        }).collect_view()}
                    </Card>

                    <Card>
                        <h3 class="card__title">{move || t(TextKey::StockMovements)}</h3>
                        {data.activity.iter().map(|a| {
                            let day = a.day.clone();
                            let out_day = a.day.clone();
                            view! {
                                <Bar
                                    label=Signal::derive(move || format!("{} {}", day, t(TextKey::Inbound)))
                                    value=a.inbound
                                    max=peak
                                    caption=format_number(a.inbound, 0)
                                />
                                <Bar
                                    label=Signal::derive(move || format!("{} {}", out_day, t(TextKey::Outbound)))
                                    value=a.outbound
                                    max=peak
                                    caption=format_number(a.outbound, 0)
                                    tone="muted"
                                />
                            }
                        }).collect_view()}
                    </Card>
                </div>

                <div class="dashboard-grid">
                    <Card>
                        <h3 class="card__title">{move || t(TextKey::BreakEven)}</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=100.0>{move || t(TextKey::Month)}</TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>{move || t(TextKey::CumulativeCost)}</TableHeaderCell>
                                    <TableHeaderCell min_width=140.0>{move || t(TextKey::CumulativeSavings)}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {data.projection.iter().map(|p| {
                                    let is_break_even = break_even.as_deref() == Some(p.month.as_str());
                                    let month = p.month.clone();
                                    let cumulative_cost = p.cumulative_cost;
                                    let cumulative_savings = p.cumulative_savings;
                                    view! {
                                        <TableRow class:table__row--selected=is_break_even>
                                            <TableCell><TableCellLayout>{month}</TableCellLayout></TableCell>
                                            <TableCell class="text-right">{format_money(cumulative_cost)}</TableCell>
                                            <TableCell class="text-right">{format_money(cumulative_savings)}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Card>

                    <InsightPanel
                        context=Signal::derive(move || t(TextKey::PerformanceAudit).to_string())
                        data=audit_data
                        lang=lang
                    />
                </div>
            </div>
        </PageFrame>
    }
}
