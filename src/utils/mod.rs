use chrono::DateTime;
use serde_json::Value;

pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Coerces a wire value that may be a number or a numeric string into a
/// non-negative amount. Anything else degrades to 0.0.
pub fn value_to_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
}

/// Line-item quantity: integer on the wire or absent, never below 1.
pub fn value_to_quantity(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().filter(|q| *q >= 1).unwrap_or(1),
        _ => 1,
    }
}

/// Renders an RFC-3339 timestamp on a 12-hour clock, keeping the offset the
/// backend sent so output does not depend on the host timezone. Unparseable
/// input gets a placeholder so the card layout stays stable.
pub fn format_order_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%-I:%M %p").to_string(),
        Err(_) => "--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amounts_accept_numbers_and_numeric_strings() {
        assert_eq!(value_to_amount(&json!(3.5)), 3.5);
        assert_eq!(value_to_amount(&json!("3.00")), 3.0);
        assert_eq!(value_to_amount(&json!("1,50")), 1.5);
    }

    #[test]
    fn malformed_amounts_degrade_to_zero() {
        assert_eq!(value_to_amount(&json!("free")), 0.0);
        assert_eq!(value_to_amount(&json!(null)), 0.0);
        assert_eq!(value_to_amount(&json!(-2.0)), 0.0);
        assert_eq!(value_to_amount(&json!([1, 2])), 0.0);
    }

    #[test]
    fn quantity_defaults_to_one() {
        assert_eq!(value_to_quantity(&json!(null)), 1);
        assert_eq!(value_to_quantity(&json!(0)), 1);
        assert_eq!(value_to_quantity(&json!(-3)), 1);
        assert_eq!(value_to_quantity(&json!(4)), 4);
    }

    #[test]
    fn order_time_renders_twelve_hour_clock() {
        assert_eq!(format_order_time("2024-01-01T10:00:00Z"), "10:00 AM");
        assert_eq!(format_order_time("2024-01-01T21:05:00Z"), "9:05 PM");
        assert_eq!(format_order_time("yesterday"), "--:--");
    }
}
