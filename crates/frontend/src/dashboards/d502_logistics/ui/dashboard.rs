use crate::shared::components::{Bar, IndicatorStatus, PlaceholderPage, StatCard, ValueFormat};
use crate::shared::format::{format_int, format_number};
use crate::shared::insights::InsightPanel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d502_logistics::LogisticsDataset;
use contracts::dashboards::d502_logistics::metrics::{total_shipments, weighted_load_factor};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::{LogisticsTab, View};
use leptos::prelude::*;
use thaw::*;

/// Загрузка ниже этого порога подсвечивается как недогруз, %
const LOW_LOAD_FACTOR: f64 = 70.0;

#[component]
pub fn LogisticsDashboard(
    #[prop(into)] lang: Signal<Language>,
    initial_tab: LogisticsTab,
    data: LogisticsDataset,
) -> impl IntoView {
    let current = View::Logistics(initial_tab);
    match initial_tab {
        LogisticsTab::Reservation => view! { <PlaceholderPage current=current lang=lang /> }.into_any(),
        LogisticsTab::Transport => view! { <TransportView lang=lang data=data /> }.into_any(),
    }
}

#[component]
fn TransportView(lang: Signal<Language>, data: LogisticsDataset) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let current = View::Logistics(LogisticsTab::Transport);

    let shipments_total = total_shipments(&data.utilization) as f64;
    let load_factor = weighted_load_factor(&data.utilization);
    let load_status = if load_factor < LOW_LOAD_FACTOR {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Good
    };
    let insight_data = data.utilization.clone();

    view! {
        <PageFrame view_key=current.key() category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{move || current.title(lang.get())}</h2>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label=Signal::derive(move || t(TextKey::TotalShipments).to_string())
                        icon_name="logistics"
                        value=Signal::derive(move || Some(shipments_total))
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::AvgLoadFactor).to_string())
                        icon_name="percent"
                        value=Signal::derive(move || Some(load_factor))
                        format=ValueFormat::Percent { decimals: 1 }
                        status=load_status
                    />
                </div>

                <div class="dashboard-grid">
                    <Card>
                        <h3 class="card__title">{move || t(TextKey::Transportation)}</h3>
                        {data.utilization.iter().map(|r| {
                            let kind = r.shipment_type;
                            let count = r.count;
                            view! {
                                <Bar
                                    label=Signal::derive(move || format!("{} ({})", t(kind.label_key()), count))
                                    value=r.load_factor
                                    max=100.0
                                    caption=format!("{}%", format_number(r.load_factor, 0))
                                    tone=if r.load_factor < LOW_LOAD_FACTOR { "warning" } else { "primary" }
                                />
                            }
                        }).collect_view()}
                    </Card>

                    <InsightPanel context="Transportation".to_string() data=insight_data lang=lang />
                </div>

                <Card>
                    <h3 class="card__title">{move || t(TextKey::ShipmentPlan)}</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>{move || t(TextKey::Route)}</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>{move || t(TextKey::Category)}</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>{move || t(TextKey::Vehicle)}</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>{move || t(TextKey::Load)}</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>{move || t(TextKey::Eta)}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {data.shipments.into_iter().map(|s| {
                                let kind = s.shipment_type;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout><span class="mono">{s.id}</span></TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{s.route}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{move || t(kind.label_key())}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{s.vehicle}</TableCellLayout></TableCell>
                                        <TableCell class="text-right">{format!("{}%", format_int(s.load))}</TableCell>
                                        <TableCell class="text-right">{s.eta}</TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Card>
            </div>
        </PageFrame>
    }
}
