use contracts::enums::Language;
use contracts::shared::dataset::{SampleDatasets, SharedDatasets};
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::view::View;
use leptos::prelude::*;
use std::sync::Arc;

/// Состояние оболочки: активный view, язык интерфейса и источник данных.
///
/// Каждая сессия начинается с `dashboard` / `en`; между перезагрузками
/// ничего не сохраняется.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<View>,
    pub lang: RwSignal<Language>,
    pub datasets: StoredValue<SharedDatasets>,
}

impl AppGlobalContext {
    pub fn new(datasets: SharedDatasets) -> Self {
        Self {
            view: RwSignal::new(View::default()),
            lang: RwSignal::new(Language::default()),
            datasets: StoredValue::new(datasets),
        }
    }

    /// Replaces the active view unconditionally.
    pub fn set_view(&self, view: View) {
        log::debug!("set_view: {}", view.key());
        self.view.set(view);
    }

    pub fn set_lang(&self, lang: Language) {
        self.lang.set(lang);
    }

    /// Breadcrumb of the active view in the active language.
    pub fn title(&self) -> String {
        self.view.get().title(self.lang.get())
    }

    /// Translation in the active language (reactive).
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.lang.get(), key)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new(Arc::new(SampleDatasets))
    }
}
