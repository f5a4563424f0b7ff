//! Tolerant field access over the parsed document tree.
//!
//! Animation documents in the wild are frequently missing fields or carry
//! them with the wrong type; lookups here degrade to `None`/defaults rather
//! than erroring.

use serde_json::Value;

/// A string field, `None` when absent or not a string.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// A string field that is present and non-empty.
pub(crate) fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|s| !s.is_empty())
}

/// An array field, `None` when absent or not an array.
pub(crate) fn arr_field<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    value.get(key)?.as_array().map(Vec::as_slice)
}

/// A numeric field, falling back to `default` when absent or mistyped.
pub(crate) fn f64_or(value: &Value, key: &str, default: f64) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn str_field_ignores_wrong_types() {
        let v = json!({"a": "x", "b": 7});
        assert_eq!(Some("x"), str_field(&v, "a"));
        assert_eq!(None, str_field(&v, "b"));
        assert_eq!(None, str_field(&v, "c"));
    }

    #[test]
    fn non_empty_rejects_empty_strings() {
        let v = json!({"a": ""});
        assert_eq!(None, non_empty_str(&v, "a"));
    }

    #[test]
    fn f64_or_defaults_on_absence_and_mistype() {
        let v = json!({"w": 32.67, "bogus": "nope"});
        assert_eq!(32.67, f64_or(&v, "w", 0.0));
        assert_eq!(0.0, f64_or(&v, "bogus", 0.0));
        assert_eq!(1.5, f64_or(&v, "missing", 1.5));
    }
}
