use super::api::fetch_insight;
use crate::shared::icons::icon;
use contracts::enums::Language;
use contracts::shared::i18n::{translate, TextKey};
use contracts::shared::insight::{
    slot_outcome, InsightPhase, InsightRequest, InsightSlot, INSIGHT_FALLBACK,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thaw::*;

/// Панель AI-анализа для снимка данных раздела.
///
/// Результат живёт только пока панель смонтирована. Повторный запуск во время
/// загрузки невозможен (кнопка заблокирована), а ответ устаревшего запроса
/// отбрасывается слотом. Ошибка возвращает панель в исходное состояние
/// с сообщением об ошибке.
#[component]
pub fn InsightPanel<T>(
    /// Метка раздела, уходит в `context`
    #[prop(into)]
    context: Signal<String>,
    /// Снимок данных раздела
    data: T,
    #[prop(into)] lang: Signal<Language>,
) -> impl IntoView
where
    T: Serialize + Send + Sync + 'static,
{
    let slot = RwSignal::new(InsightSlot::new());
    let data = StoredValue::new(data);

    let analyze = move || {
        let lang_now = lang.get_untracked();
        let context_now = context.get_untracked();
        let ticket = slot.try_update(|s| s.begin());
        let Some(ticket) = ticket else { return };

        let request = data.with_value(|d| InsightRequest::new(context_now, d, lang_now));
        match request {
            Ok(request) => spawn_local(async move {
                let outcome = slot_outcome(fetch_insight(&request).await);
                // Панель могла быть размонтирована за время запроса
                slot.try_update(|s| {
                    if !s.complete(ticket, outcome) {
                        log::debug!("Dropped stale insight for '{}'", request.context);
                    }
                });
            }),
            Err(e) => {
                log::error!("Cannot serialize insight data: {}", e);
                slot.update(|s| {
                    s.complete(ticket, Err(INSIGHT_FALLBACK.to_string()));
                });
            }
        }
    };

    let t = move |key: TextKey| translate(lang.get(), key);
    let is_loading = move || slot.with(|s| s.is_loading());

    view! {
        <div class="insight-panel">
            <div class="insight-panel__header">
                <div class="insight-panel__icon">{icon("zap")}</div>
                <h3 class="insight-panel__title">{move || t(TextKey::AiInsights)}</h3>
            </div>

            <div class="insight-panel__body">
                {move || match slot.with(|s| s.phase()) {
                    InsightPhase::Loading => view! {
                        <div class="insight-panel__loading">
                            <Space gap=SpaceGap::Small>
                                <Spinner />
                                <span>{t(TextKey::Generating)}</span>
                            </Space>
                        </div>
                    }.into_any(),
                    InsightPhase::Ready => view! {
                        <div class="insight-panel__text">
                            {slot.with(|s| s.text().unwrap_or_default().to_string())}
                        </div>
                    }.into_any(),
                    InsightPhase::Idle => view! {
                        <div class="insight-panel__placeholder">
                            {slot.with(|s| s.error().map(|e| view! {
                                <p class="insight-panel__error">{e.to_string()}</p>
                            }))}
                            <p>{t(TextKey::InsightPlaceholder)}</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(is_loading)
                on_click=move |_| analyze()
            >
                {icon("sparkles")}
                {move || t(TextKey::Analyze)}
            </Button>
        </div>
    }
}
