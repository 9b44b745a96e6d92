//! Горизонтальная полоса на CSS-ширине вместо графика

use leptos::prelude::*;

/// Ширина полосы в процентах, ограниченная 0..=100; при `max <= 0` полоса пустая
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn Bar(
    #[prop(into)] label: Signal<String>,
    value: f64,
    max: f64,
    /// Подпись справа, уже отформатированная
    #[prop(into)]
    caption: String,
    /// Модификатор цвета: `primary`, `warning`, `muted`
    #[prop(optional)]
    tone: Option<&'static str>,
) -> impl IntoView {
    let fill_class = format!("bar__fill bar__fill--{}", tone.unwrap_or("primary"));

    view! {
        <div class="bar">
            <div class="bar__label">{move || label.get()}</div>
            <div class="bar__track">
                <div class=fill_class style:width=format!("{:.1}%", bar_width(value, max))></div>
            </div>
            <div class="bar__caption">{caption}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(300.0, 200.0), 100.0);
        assert_eq!(bar_width(-5.0, 200.0), 0.0);
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }
}
