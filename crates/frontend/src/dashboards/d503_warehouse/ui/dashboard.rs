use crate::shared::components::{Bar, PlaceholderPage, StatCard, ValueFormat};
use crate::shared::format::{format_int, format_number, format_optional};
use crate::shared::insights::InsightPanel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d503_warehouse::WarehouseDataset;
use contracts::dashboards::d503_warehouse::metrics::{
    peak_overtime_day, stock_share, total_overtime, total_stock,
};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::{View, WarehouseTab};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WarehouseDashboard(
    #[prop(into)] lang: Signal<Language>,
    initial_tab: WarehouseTab,
    data: WarehouseDataset,
) -> impl IntoView {
    match initial_tab {
        WarehouseTab::Dashboard => view! { <PerformanceView lang=lang data=data /> }.into_any(),
        WarehouseTab::Inefficiency => view! {
            <PlaceholderPage current=View::Warehouse(WarehouseTab::Inefficiency) lang=lang />
        }
        .into_any(),
    }
}

#[component]
fn PerformanceView(lang: Signal<Language>, data: WarehouseDataset) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let current = View::Warehouse(WarehouseTab::Dashboard);

    let stock_total = total_stock(&data.stock);
    let overtime_total = total_overtime(&data.overtime);
    let peak = peak_overtime_day(&data.overtime).map(|r| (r.day.clone(), r.hours));
    let overtime_max = peak.as_ref().map(|(_, hours)| *hours).unwrap_or(0.0);
    let insight_data = data.clone();

    view! {
        <PageFrame view_key=current.key() category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{move || current.title(lang.get())}</h2>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label=Signal::derive(move || t(TextKey::TotalStock).to_string())
                        icon_name="warehouse"
                        value=Signal::derive(move || Some(stock_total))
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::OvertimeHours).to_string())
                        icon_name="clock"
                        value=Signal::derive(move || Some(overtime_total))
                        format=ValueFormat::Unit("h")
                    />
                    <div class="stat-card">
                        <div class="stat-card__content">
                            <div class="stat-card__label">{move || t(TextKey::PeakDay)}</div>
                            <div class="stat-card__value">
                                {peak.map(|(day, hours)| format!("{} ({} h)", day, format_int(hours)))}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="dashboard-grid">
                    <Card>
                        <h3 class="card__title">{move || t(TextKey::StockByCategory)}</h3>
                        {data.stock.iter().map(|r| {
                            let category = r.category;
                            let share = stock_share(r, stock_total);
                            view! {
                                <Bar
                                    label=Signal::derive(move || t(category.label_key()).to_string())
                                    value=share.unwrap_or(0.0)
                                    max=100.0
                                    caption=format!(
                                        "{} ({})",
                                        format_int(r.quantity),
                                        format_optional(share, |v| format!("{}%", format_number(v, 1)))
                                    )
                                />
                            }
                        }).collect_view()}
                    </Card>

                    <Card>
                        <h3 class="card__title">{move || t(TextKey::OvertimeHours)}</h3>
                        {data.overtime.iter().map(|r| {
                            let day = r.day.clone();
                            view! {
                                <Bar
                                    label=Signal::derive(move || day.clone())
                                    value=r.hours
                                    max=overtime_max
                                    caption=format!("{} h", format_int(r.hours))
                                    tone={if r.hours >= overtime_max { "warning" } else { "primary" }}
                                />
                            }
                        }).collect_view()}
                    </Card>
                </div>

                <InsightPanel context="Warehouse Performance".to_string() data=insight_data lang=lang />
            </div>
        </PageFrame>
    }
}
