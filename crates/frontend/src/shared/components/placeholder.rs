use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_PLACEHOLDER};
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::View;
use leptos::prelude::*;
use thaw::*;

/// Подвид без содержимого: заголовок и сообщение "нет данных"
#[component]
pub fn PlaceholderPage(current: View, #[prop(into)] lang: Signal<Language>) -> impl IntoView {
    view! {
        <PageFrame view_key=current.key() category=PAGE_CAT_PLACEHOLDER>
            <div class="page__header">
                <h2>{move || current.title(lang.get())}</h2>
            </div>
            <div class="page__content">
                <Card>
                    <div class="empty-state">
                        {icon("package")}
                        <p>{move || translate(lang.get(), TextKey::NoDataYet)}</p>
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}
