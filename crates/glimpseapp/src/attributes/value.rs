//! Lenient coercion of raw attribute values.
//!
//! Attribute maps come from an editor that stores whatever its controls
//! produced: numbers as strings, ids as numbers, flags as `"0"`. None of the
//! helpers here fail. Malformed input collapses to zero, empty or "unset", and
//! the content store sorts out whether the result matches anything.

use serde_json::Value;

/// Coerce a value to a non-negative integer id.
///
/// Negative and non-numeric input yields `0`.
pub fn to_id(value: &Value) -> u64 {
    match to_int(value) {
        Some(n) if n > 0 => n as u64,
        _ => 0,
    }
}

/// Coerce a value to a signed integer, if it carries one.
///
/// - Numbers: integer part (floats truncate toward zero).
/// - Strings: leading integer prefix after optional whitespace (`"12abc"` → 12).
/// - Booleans: `0` or `1`.
/// - Anything else, or a string without digits: `None`.
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overlong digit runs saturate instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a value to a list of ids, preserving order.
///
/// A non-array value is an empty list. Elements that do not coerce become `0`.
pub fn to_id_list(value: &Value) -> Vec<u64> {
    match value {
        Value::Array(items) => items.iter().map(to_id).collect(),
        _ => Vec::new(),
    }
}

/// Coerce a value to a boolean flag. `None` for `null`, so the caller can apply its default.
pub fn to_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => {
            let s = s.trim();
            Some(!(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")))
        }
        Value::Array(items) => Some(!items.is_empty()),
        Value::Null | Value::Object(_) => None,
    }
}

/// Coerce a value to display text. Scalars are stringified, everything else is empty.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_from_numeric_string() {
        assert_eq!(to_id(&json!("3")), 3);
        assert_eq!(to_id(&json!("  42")), 42);
        assert_eq!(to_id(&json!("12abc")), 12);
    }

    #[test]
    fn id_from_number() {
        assert_eq!(to_id(&json!(7)), 7);
        assert_eq!(to_id(&json!(7.9)), 7);
    }

    #[test]
    fn id_negative_or_garbage_is_zero() {
        assert_eq!(to_id(&json!(-7)), 0);
        assert_eq!(to_id(&json!("-7")), 0);
        assert_eq!(to_id(&json!("abc")), 0);
        assert_eq!(to_id(&json!("")), 0);
        assert_eq!(to_id(&json!(null)), 0);
        assert_eq!(to_id(&json!(["1"])), 0);
    }

    #[test]
    fn int_keeps_sign() {
        assert_eq!(to_int(&json!("-3")), Some(-3));
        assert_eq!(to_int(&json!(-3.7)), Some(-3));
        assert_eq!(to_int(&json!("+9")), Some(9));
        assert_eq!(to_int(&json!("x")), None);
        assert_eq!(to_int(&json!(null)), None);
    }

    #[test]
    fn int_saturates_on_overflow() {
        assert_eq!(to_int(&json!("99999999999999999999999")), Some(i64::MAX));
        assert_eq!(to_int(&json!(u64::MAX)), Some(i64::MAX));
    }

    #[test]
    fn id_list_preserves_order() {
        assert_eq!(to_id_list(&json!(["10", "2", "5"])), vec![10, 2, 5]);
        assert_eq!(to_id_list(&json!([1, "x", 3])), vec![1, 0, 3]);
    }

    #[test]
    fn id_list_from_non_array_is_empty() {
        assert!(to_id_list(&json!("10")).is_empty());
        assert!(to_id_list(&json!(null)).is_empty());
    }

    #[test]
    fn flag_coercion() {
        assert_eq!(to_flag(&json!(true)), Some(true));
        assert_eq!(to_flag(&json!(0)), Some(false));
        assert_eq!(to_flag(&json!(2)), Some(true));
        assert_eq!(to_flag(&json!("0")), Some(false));
        assert_eq!(to_flag(&json!("False")), Some(false));
        assert_eq!(to_flag(&json!("")), Some(false));
        assert_eq!(to_flag(&json!("yes")), Some(true));
        assert_eq!(to_flag(&json!(null)), None);
    }

    #[test]
    fn text_coercion() {
        assert_eq!(to_text(&json!("Go")), "Go");
        assert_eq!(to_text(&json!(5)), "5");
        assert_eq!(to_text(&json!(["a"])), "");
    }
}
