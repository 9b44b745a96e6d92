//! Реестр содержимого центральной области: `View` -> модуль раздела

use crate::dashboards::{
    CustomsDashboard, LogisticsDashboard, OverviewDashboard, ProcurementDashboard,
    WarehouseDashboard,
};
use contracts::enums::Language;
use contracts::shared::dataset::DatasetProvider;
use contracts::shared::view::View;
use leptos::prelude::*;

/// Модуль раздела для вида; подвид передаётся как `initial_tab`,
/// данные раздела берутся у провайдера
pub fn render_view_content(
    current: View,
    lang: Signal<Language>,
    datasets: &(dyn DatasetProvider + Send + Sync),
) -> AnyView {
    match current {
        View::Dashboard => {
            view! { <OverviewDashboard lang=lang data=datasets.overview() /> }.into_any()
        }
        View::Procurement(tab) => view! {
            <ProcurementDashboard lang=lang initial_tab=tab data=datasets.procurement() />
        }
        .into_any(),
        View::Logistics(tab) => view! {
            <LogisticsDashboard lang=lang initial_tab=tab data=datasets.logistics() />
        }
        .into_any(),
        View::Warehouse(tab) => view! {
            <WarehouseDashboard lang=lang initial_tab=tab data=datasets.warehouse() />
        }
        .into_any(),
        View::Customs(tab) => view! {
            <CustomsDashboard lang=lang initial_tab=tab data=datasets.customs() />
        }
        .into_any(),
    }
}
