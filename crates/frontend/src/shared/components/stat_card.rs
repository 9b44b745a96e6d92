use crate::shared::format::{format_int, format_money, format_number};
use crate::shared::icons::icon;
use contracts::shared::view::NOT_AVAILABLE;
use leptos::prelude::*;

/// Как форматировать значение карточки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    Money,
    Integer,
    Number { decimals: usize },
    Percent { decimals: usize },
    /// Integer followed by a unit, e.g. `265 h`
    Unit(&'static str),
}

/// Визуальный статус карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Warning,
    #[default]
    Neutral,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_money(val),
        ValueFormat::Integer => format_int(val),
        ValueFormat::Number { decimals } => format_number(val, decimals),
        ValueFormat::Percent { decimals } => format!("{}%", format_number(val, decimals)),
        ValueFormat::Unit(unit) => format!("{} {}", format_int(val), unit),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = N/A)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into, optional)]
    status: Signal<IndicatorStatus>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => NOT_AVAILABLE.to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3720.0, ValueFormat::Money), "$3,720");
        assert_eq!(format_value(12520.0, ValueFormat::Integer), "12,520");
        assert_eq!(format_value(18.0, ValueFormat::Percent { decimals: 1 }), "18.0%");
        assert_eq!(format_value(265.0, ValueFormat::Unit("h")), "265 h");
        assert_eq!(format_value(9.07, ValueFormat::Number { decimals: 2 }), "9.07");
    }
}
