use crate::shared::format::{format_int, format_optional, format_signed_percent};
use crate::shared::insights::InsightPanel;
use contracts::dashboards::d501_procurement::dto::{
    AnnualSummaryRecord, OpenOrderRecord, OrderStatus,
};
use contracts::dashboards::d501_procurement::metrics::{
    orders_per_category, price_diff_percent, OrderFilter,
};
use contracts::enums::{Category, Language, Region};
use contracts::shared::i18n::{translate, TextKey};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Пауза "получения данных" перед показом результатов по региону
const FETCH_DELAY_MS: u32 = 1_200;

#[component]
pub fn OrdersTab(
    #[prop(into)] lang: Signal<Language>,
    annual_summary: Vec<AnnualSummaryRecord>,
    open_orders: Vec<OpenOrderRecord>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    let filter = RwSignal::new(OrderFilter::default());
    // Перерисовка результатов только при смене видимого региона, не категории
    let region = Memo::new(move |_| filter.with(|f| f.visible_region()));

    let orders = StoredValue::new(open_orders);
    let summary = StoredValue::new(annual_summary);

    let perform_analysis = move |target: Region| {
        filter.update(|f| f.begin_fetch(target));
        spawn_local(async move {
            TimeoutFuture::new(FETCH_DELAY_MS).await;
            filter.try_update(|f| f.finish_fetch());
        });
    };

    let region_button = move |target: Region| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || filter.with(|f| f.is_fetching()))
                loading=Signal::derive(move || filter.with(|f| f.pending == Some(target)))
                on_click=move |_| perform_analysis(target)
            >
                {move || if filter.with(|f| f.pending == Some(target)) {
                    t(TextKey::FetchingData).to_string()
                } else {
                    format!("{} ({})", t(TextKey::PerformAnalysis), target.code())
                }}
            </Button>
        }
    };

    let category_button = move |category: Category, label: Signal<String>| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=Signal::derive(move || {
                    if filter.with(|f| f.category == Some(category)) {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                on_click=move |_| filter.update(|f| f.toggle_category(category))
            >
                {label}
            </Button>
        }
    };

    let results = move || {
        region.get().map(|selected| {
            let filtered: Vec<OpenOrderRecord> =
                orders.with_value(|all| filter.with_untracked(|f| f.filter_orders(all)).into_iter().cloned().collect());
            let counts = orders_per_category(&filtered.iter().collect::<Vec<_>>());
            let rows = filtered.clone();

            view! {
                <div class="stat-grid">
                    {summary.get_value().into_iter().map(|item| {
                        let category = item.category;
                        let trend_up = item.trend.contains('+');
                        view! {
                            <div class="stat-card">
                                <div class="stat-card__content">
                                    <div class="stat-card__label">{move || t(category.label_key())}</div>
                                    <div class="stat-card__value">
                                        {item.total_orders} " "
                                        <span class="stat-card__unit">{move || t(TextKey::OrderPlural)}</span>
                                    </div>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if trend_up { BadgeColor::Success } else { BadgeColor::Subtle }
                                    >
                                        {item.trend.clone()}
                                    </Badge>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <Card>
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h4 class="card__title">{move || format!("{} - {}", t(TextKey::OpenOrders), selected.hub_name())}</h4>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {move || t(TextKey::TapCategoryDetail)}
                        </Badge>
                    </Flex>

                    <Flex gap=FlexGap::Small>
                        {counts.into_iter().map(|(category, count)| {
                            category_button(
                                category,
                                Signal::derive(move || format!("{}: {}", t(category.label_key()), count)),
                            )
                        }).collect_view()}
                    </Flex>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>{move || t(TextKey::PoNo)}</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>{move || t(TextKey::Product)}</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>{move || t(TextKey::Category)}</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>{move || t(TextKey::Quantity)}</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>{move || t(TextKey::Status)}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows.into_iter().map(|o| {
                                let category = o.category;
                                let delayed = o.status == OrderStatus::Delayed;
                                view! {
                                    <TableRow class:table__row--selected=move || filter.with(|f| f.category == Some(category))>
                                        <TableCell><TableCellLayout><span class="mono">{o.po_no.clone()}</span></TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{o.item.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {category_button(category, Signal::derive(move || t(category.label_key()).to_string()))}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            {format!("{} / {}", format_int(o.actual_qty), format_int(o.budget_qty))}
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge
                                                    appearance=BadgeAppearance::Tint
                                                    color=if delayed { BadgeColor::Danger } else { BadgeColor::Success }
                                                >
                                                    {move || t(o.status.label_key())}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Card>

                <CategoryDetails lang=lang filter=filter orders=orders />

                <InsightPanel
                    context=format!("Order Compliance Analysis ({})", selected.code())
                    data=filtered
                    lang=lang
                />
            }
        })
    };

    view! {
        <Card attr:style="border-left: 4px solid var(--color-primary);">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <div>
                    <h3 class="card__title">{move || t(TextKey::OrderAnalysis)}</h3>
                    <p class="card__hint">{move || t(TextKey::OrderAnalysisHint)}</p>
                </div>
                <Flex gap=FlexGap::Small>
                    {Region::all().into_iter().map(region_button).collect_view()}
                </Flex>
            </Flex>
        </Card>

        {results}
    }
}

/// Детализация выбранной категории внутри региона
#[component]
fn CategoryDetails(
    lang: Signal<Language>,
    filter: RwSignal<OrderFilter>,
    orders: StoredValue<Vec<OpenOrderRecord>>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    move || {
        let selected = filter.with(|f| f.category)?;
        let details: Vec<OpenOrderRecord> = orders.with_value(|all| {
            filter.with(|f| f.category_details(all).into_iter().cloned().collect())
        });

        Some(view! {
            <Card attr:style="border: 1px solid var(--color-primary);">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h4 class="card__title">
                        {move || format!("{}: {}", t(TextKey::CategoryDetails), t(selected.label_key()))}
                    </h4>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| filter.update(|f| f.clear_category())
                    >
                        {move || t(TextKey::ClearSelection)}
                    </Button>
                </Flex>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=120.0>{move || t(TextKey::ItemCode)}</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>{move || t(TextKey::Item)}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || t(TextKey::PriceDiff)}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || t(TextKey::Pallets)}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || t(TextKey::DeliveryDate)}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {details.into_iter().map(|o| {
                            let diff = price_diff_percent(o.actual_price, o.budget_price);
                            let over = diff.map(|d| d > 0.0).unwrap_or(false);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout><span class="mono">{o.item_code.clone()}</span></TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{o.item.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <span class:text-error=over class:text-success={!over}>
                                            {format_optional(diff, format_signed_percent)}
                                        </span>
                                    </TableCell>
                                    <TableCell>{o.pallets}</TableCell>
                                    <TableCell class="text-right">{o.delivery_date.clone()}</TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Card>
        })
    }
}
