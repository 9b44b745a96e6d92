use crate::layout::center::registry::render_view_content;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use contracts::shared::dataset::SampleDatasets;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(Arc::new(SampleDatasets));
    provide_context(ctx);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            // Пересборка только при смене view; язык модули читают сигналом
            center=move || {
                let datasets = ctx.datasets.get_value();
                render_view_content(ctx.view.get(), ctx.lang.into(), datasets.as_ref())
            }
        />
    }
}
