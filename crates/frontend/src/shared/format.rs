//! Утилиты форматирования чисел для карточек и таблиц

use contracts::shared::view::NOT_AVAILABLE;

/// Число с разделителем тысяч (запятая) и заданным количеством знаков,
/// например `1234.567, 2` даёт `1,234.57`. NaN и бесконечность дают `N/A`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Целое с разделителем тысяч
pub fn format_int(value: f64) -> String {
    format_number(value, 0)
}

/// Денежное значение в долларах: `$1,234`
pub fn format_money(value: f64) -> String {
    format_money_decimals(value, 0)
}

/// Денежное значение со знаком перед `$`: `-$1,234.50`
pub fn format_money_decimals(value: f64, decimals: usize) -> String {
    // -0.0 печатается как "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value < 0.0 {
        format!("-${}", format_number(-value, decimals))
    } else {
        format!("${}", format_number(value, decimals))
    }
}

/// Процент с одним знаком и явным знаком `+` для положительных
pub fn format_signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{}%", format_number(value, 1))
    } else {
        format!("{}%", format_number(value, 1))
    }
}

/// `None` отображается как `N/A`
pub fn format_optional(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value
        .map(fmt)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(147000.0, 0), "147,000");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-1179.0, 0), "-1,179");
        assert_eq!(format_number(-123.0, 0), "-123");
    }

    #[test]
    fn test_non_finite_is_not_available() {
        assert_eq!(format_number(f64::NAN, 2), "N/A");
        assert_eq!(format_number(f64::INFINITY, 0), "N/A");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(28900.0), "$28,900");
        assert_eq!(format_money(-3720.0), "-$3,720");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_money_decimals_sign() {
        assert_eq!(format_money_decimals(-11500.0, 2), "-$11,500.00");
        assert_eq!(format_money_decimals(1234.0, 2), "$1,234.00");
        assert_eq!(format_money_decimals(-0.0, 2), "$0.00");
        assert_eq!(format_money(-0.0), "$0");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(12.34), "+12.3%");
        assert_eq!(format_signed_percent(-4.0), "-4.0%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, format_signed_percent), "N/A");
        assert_eq!(format_optional(Some(18.0), |v| format!("{}%", format_number(v, 1))), "18.0%");
    }
}
