use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <aside data-zone="left" class="app-sidebar">
            {children()}
        </aside>
    }
}
