use crate::shared::insights::InsightPanel;
use contracts::dashboards::d501_procurement::dto::BomErrorRecord;
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BomTab(
    #[prop(into)] lang: Signal<Language>,
    bom_errors: Vec<BomErrorRecord>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);
    let error_count = bom_errors.len();
    let insight_data = bom_errors.clone();

    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3 class="card__title">{move || t(TextKey::BomControl)}</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                    {error_count} " CRITICAL"
                </Badge>
            </Flex>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=220.0>
                            {move || format!("{} / {}", t(TextKey::ParentItem), t(TextKey::Component))}
                        </TableHeaderCell>
                        <TableHeaderCell min_width=220.0>{move || t(TextKey::ErrorCode)}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{move || t(TextKey::ImpactedDocs)}</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>{move || t(TextKey::Action)}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {bom_errors.into_iter().map(|row| view! {
                        <TableRow>
                            <TableCell>
                                <p class="strong">{row.parent_item}</p>
                                <p class="text-info">{row.component}</p>
                            </TableCell>
                            <TableCell>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                    {row.error_code}
                                </Badge>
                                <p class="list-row__hint">{row.error_detail}</p>
                            </TableCell>
                            <TableCell class="mono">{format!("{} / {}", row.impacted_req, row.impacted_po)}</TableCell>
                            <TableCell class="text-right">{row.action}</TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </Card>

        <InsightPanel context="BOM Conflict Analysis".to_string() data=insight_data lang=lang />
    }
}
