//! PageFrame: стандартная обёртка страницы раздела.
//!
//! Корневой элемент получает:
//!   - `id`                  = `"{view_key}--{category}"`, например `"procurement-orders--dashboard"`
//!   - `data-page-category`  = одна из констант PAGE_CAT_*

use leptos::prelude::*;

/// Analytical dashboard with cards, tables and an insight panel.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Subview without content yet.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

#[component]
pub fn PageFrame(
    /// View key, e.g. `"procurement-orders"`
    #[prop(into)]
    view_key: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_PLACEHOLDER => "page page--placeholder",
        _ => "page",
    };

    view! {
        <div
            id=format!("{}--{}", view_key, category)
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
