//! Sidebar: кнопка дашборда и сворачиваемые группы разделов

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::i18n::TextKey;
use contracts::shared::view::{Section, View};
use leptos::prelude::*;

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Procurement => "procurement",
        Section::Logistics => "logistics",
        Section::Warehouse => "warehouse",
        Section::Customs => "customs",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Группы изначально свернуты
    let expanded_groups = RwSignal::new(Vec::<Section>::new());

    view! {
        <div class="app-sidebar__brand">
            <div class="app-sidebar__logo">{icon("zap")}</div>
            <span class="app-sidebar__title">"CHAIN MASTER"</span>
        </div>

        <nav class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.view.get() == View::Dashboard
                on:click=move |_| ctx.set_view(View::Dashboard)
            >
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>{move || ctx.t(TextKey::Dashboard)}</span>
                </div>
            </div>

            {Section::all().into_iter().map(|section| {
                let views = StoredValue::new(section.views());
                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--current=move || ctx.view.get().section() == Some(section)
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|s| *s == section) {
                                        items.remove(pos);
                                    } else {
                                        items.push(section);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(section_icon(section))}
                                <span>{move || ctx.t(section.label_key())}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&section)
                            >
                                {icon("chevron-down")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.get().contains(&section)>
                            <div class="app-sidebar__children">
                                {views.get_value().into_iter().map(|sub| {
                                    let label_key = sub.subview_label_key().unwrap_or(TextKey::Dashboard);
                                    view! {
                                        <button
                                            class="app-sidebar__subitem"
                                            class:app-sidebar__subitem--active=move || ctx.view.get() == sub
                                            on:click=move |_| ctx.set_view(sub)
                                        >
                                            {move || ctx.t(label_key)}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>

        <div class="app-sidebar__footer">
            <div class="app-sidebar__status">
                <p class="app-sidebar__status-label">{move || ctx.t(TextKey::SystemStatus)}</p>
                <p class="app-sidebar__status-value">{move || ctx.t(TextKey::AiCoreOptimized)}</p>
            </div>
        </div>
    }
}
