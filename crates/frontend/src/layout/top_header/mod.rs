//! TopHeader: название приложения, breadcrumb активного вида и
//! переключатель языка.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::enums::Language;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || ctx.t(TextKey::AppTitle)}</span>
                <span class="top-header__separator">"|"</span>
                <span class="top-header__breadcrumb">{move || ctx.title()}</span>
            </div>

            <div class="top-header__actions">
                {icon("globe")}
                <div class="top-header__lang">
                    {Language::all().into_iter().map(|lang| {
                        view! {
                            <button
                                class="top-header__lang-btn"
                                class:top-header__lang-btn--active=move || ctx.lang.get() == lang
                                on:click=move |_| ctx.set_lang(lang)
                            >
                                {lang.code().to_uppercase()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </header>
    }
}
