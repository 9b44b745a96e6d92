use crate::shared::components::{IndicatorStatus, StatCard, ValueFormat};
use crate::shared::format::format_money;
use crate::shared::insights::InsightPanel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d504_customs::CustomsDataset;
use contracts::dashboards::d504_customs::dto::{ExportDeclaration, ImportDeclaration};
use contracts::dashboards::d504_customs::metrics::{
    effective_tax_rate, total_export_duty, total_export_value, total_import_tax,
    total_import_value,
};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::{CustomsTab, View};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomsDashboard(
    #[prop(into)] lang: Signal<Language>,
    initial_tab: CustomsTab,
    data: CustomsDataset,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let current = View::Customs(initial_tab);

    let content = match initial_tab {
        CustomsTab::Dashboard => {
            let import_value = total_import_value(&data.imports);
            let import_tax = total_import_tax(&data.imports);
            let tax_rate = effective_tax_rate(&data.imports);
            let export_value = total_export_value(&data.exports);
            let export_duty = total_export_duty(&data.exports);
            let insight_data = serde_json::json!({
                "imports": data.imports.len(),
                "exports": data.exports.len(),
            });

            view! {
                <div class="stat-grid">
                    <StatCard
                        label=Signal::derive(move || t(TextKey::TotalImportValue).to_string())
                        icon_name="package"
                        value=Signal::derive(move || Some(import_value))
                        format=ValueFormat::Money
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::TotalTax).to_string())
                        icon_name="dollar-sign"
                        value=Signal::derive(move || Some(import_tax))
                        format=ValueFormat::Money
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::EffectiveTaxRate).to_string())
                        icon_name="percent"
                        value=Signal::derive(move || tax_rate)
                        format=ValueFormat::Percent { decimals: 1 }
                    />
                    <StatCard
                        label=Signal::derive(move || t(TextKey::TotalExportValue).to_string())
                        icon_name="trending-up"
                        value=Signal::derive(move || Some(export_value))
                        format=ValueFormat::Money
                        status=IndicatorStatus::Good
                        subtitle=Signal::derive(move || Some(format!("{}: {}", t(TextKey::Duty), format_money(export_duty))))
                    />
                </div>

                <InsightPanel
                    context="Gümrük ve Dış Ticaret Mevzuat Analizi".to_string()
                    data=insight_data
                    lang=lang
                />
            }
            .into_any()
        }
        CustomsTab::Import => view! { <ImportTable lang=lang imports=data.imports /> }.into_any(),
        CustomsTab::Export => view! { <ExportTable lang=lang exports=data.exports /> }.into_any(),
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

#[component]
fn ImportTable(lang: Signal<Language>, imports: Vec<ImportDeclaration>) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    view! {
        <Card>
            <h3 class="card__title">{move || t(TextKey::ImportDetails)}</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=110.0>{move || t(TextKey::DeclarationNo)}</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>{move || t(TextKey::Product)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::HsCode)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Origin)}</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>{move || t(TextKey::Carrier)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Value)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Tax)}</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>{move || t(TextKey::Status)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {imports.into_iter().map(|d| view! {
                        <TableRow>
                            <TableCell><TableCellLayout><span class="mono">{d.id}</span></TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><span class="strong">{d.product}</span></TableCellLayout></TableCell>
                            <TableCell class="mono">{d.hs_code}</TableCell>
                            <TableCell><TableCellLayout>{d.origin}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{d.carrier}</TableCellLayout></TableCell>
                            <TableCell class="text-right">{format_money(d.value)}</TableCell>
                            <TableCell class="text-right text-error">{format_money(d.tax)}</TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{d.status}</Badge>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>
    }
}

#[component]
fn ExportTable(lang: Signal<Language>, exports: Vec<ExportDeclaration>) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    view! {
        <Card>
            <h3 class="card__title">{move || t(TextKey::ExportDetails)}</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=110.0>{move || t(TextKey::DeclarationNo)}</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>{move || t(TextKey::Product)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::HsCode)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Destination)}</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>{move || t(TextKey::Carrier)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Value)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::Duty)}</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>{move || t(TextKey::Status)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {exports.into_iter().map(|d| view! {
                        <TableRow>
                            <TableCell><TableCellLayout><span class="mono">{d.id}</span></TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><span class="strong">{d.product}</span></TableCellLayout></TableCell>
                            <TableCell class="mono">{d.hs_code}</TableCell>
                            <TableCell><TableCellLayout>{d.destination}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{d.carrier}</TableCellLayout></TableCell>
                            <TableCell class="text-right text-success">{format_money(d.value)}</TableCell>
                            <TableCell class="text-right">{format_money(d.duty)}</TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{d.status}</Badge>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>
    }
}
