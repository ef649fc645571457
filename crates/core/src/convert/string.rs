//! Conversions to `String`

use super::or_default;
use crate::error::{ConvertError, Result, Target};
use crate::value::Value;

/// Strict conversion to `String`
///
/// Succeeds only for `Value::String`, including the empty string. Numbers
/// are not stringified here; see [`string_force`].
pub fn string_value(value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(ConvertError::Absent),
        Value::String(s) => Ok(s.clone()),
        other => Err(ConvertError::unsupported(Target::String, other)),
    }
}

/// [`string_value`], or `default` on any error
///
/// The fallback is returned by move, untouched.
pub fn string_default(value: &Value, default: String) -> String {
    or_default(Target::String, value, string_value(value), default)
}

/// [`string_value`], or the empty string on any error
pub fn to_string(value: &Value) -> String {
    string_default(value, String::new())
}

/// Best-effort stringification; never fails
///
/// `Null` becomes the empty string and strings are returned as-is. Every
/// other value uses its canonical `Display` rendering.
pub fn string_force(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
