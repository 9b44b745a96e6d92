use super::bom::BomTab;
use super::escalation::EscalationTab;
use super::orders::OrdersTab;
use super::prices::PricesTab;
use super::suppliers::SuppliersTab;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d501_procurement::ProcurementDataset;
use contracts::enums::Language;
use contracts::shared::view::{ProcurementTab, View};
use leptos::prelude::*;

/// Закупки: подвид выбирается через `initial_tab`
#[component]
pub fn ProcurementDashboard(
    #[prop(into)] lang: Signal<Language>,
    initial_tab: ProcurementTab,
    data: ProcurementDataset,
) -> impl IntoView {
    let current = View::Procurement(initial_tab);
    let ProcurementDataset {
        price_analysis,
        escalation,
        suppliers,
        bom_errors,
        annual_summary,
        open_orders,
    } = data;

    let content = match initial_tab {
        ProcurementTab::Orders => view! {
            <OrdersTab lang=lang annual_summary=annual_summary open_orders=open_orders />
        }
        .into_any(),
        ProcurementTab::Prices => view! { <PricesTab lang=lang price_analysis=price_analysis /> }.into_any(),
        ProcurementTab::Escalation => view! { <EscalationTab lang=lang escalation=escalation /> }.into_any(),
        ProcurementTab::Suppliers => view! { <SuppliersTab lang=lang suppliers=suppliers /> }.into_any(),
        ProcurementTab::Bom => view! { <BomTab lang=lang bom_errors=bom_errors /> }.into_any(),
    };

    view! {
        <PageFrame view_key=current.key() category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{move || current.title(lang.get())}</h2>
            </div>
            <div class="page__content">
                {content}
            </div>
        </PageFrame>
    }
}
