//! Formatting helpers for presenting metric values and dates.

use time::{macros::format_description, Date};

/// Group the integer part with commas and keep up to `decimals` fraction digits.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && raw.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Compact tick label: `15.2M`, `850k`, `68.5`.
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_zeros(value / 1_000_000.0))
    } else if abs >= 10_000.0 {
        format!("{}k", trim_zeros(value / 1_000.0))
    } else {
        trim_zeros(value)
    }
}

/// Tooltip value: integers grouped, fractional values to one decimal.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number(value, 0)
    } else {
        format_number(value, 1)
    }
}

/// Long-form date for the navbar, e.g. `October 15, 2026`.
pub fn format_long_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:long] [day padding:zero], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

fn trim_zeros(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(15_073_400.0, 0), "15,073,400");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1_234.56, 1), "1,234.6");
        assert_eq!(format_number(-2_500.0, 0), "-2,500");
    }

    #[test]
    fn non_finite_is_a_dash() {
        assert_eq!(format_number(f64::NAN, 2), "—");
    }

    #[test]
    fn ticks_are_compact() {
        assert_eq!(format_tick(15_000_000.0), "15M");
        assert_eq!(format_tick(2_500_000.0), "2.5M");
        assert_eq!(format_tick(850_000.0), "850k");
        assert_eq!(format_tick(68.5), "68.5");
        assert_eq!(format_tick(0.0), "0");
    }

    #[test]
    fn long_date() {
        let date = Date::from_calendar_date(2026, time::Month::October, 5).unwrap();
        assert_eq!(format_long_date(date), "October 05, 2026");
    }

    #[test]
    fn tooltip_values() {
        assert_eq!(format_value(3_100_000.0), "3,100,000");
        assert_eq!(format_value(68.74), "68.7");
    }
}
