//! Helpers for the dynamically typed `value` carried by a field.
//!
//! Field values are stored as [`serde_json::Value`] so that any JSON payload
//! survives a decode/encode cycle. The helpers here give those values the
//! loose truthiness and string conversion rules that form validation relies on.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a present key as `Some(value)`, including an explicit `null`.
///
/// Combined with `#[serde(default)]`, an absent key stays `None` while
/// `"value": null` becomes `Some(Value::Null)`.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Returns the truthiness of a value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns true for an unset, `null` or empty-string value.
///
/// `0` and `false` are real answers and are not blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Converts a value to the text a pattern is matched against.
///
/// Strings are used verbatim; arrays join their elements with commas and
/// render `null` elements as empty text.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
