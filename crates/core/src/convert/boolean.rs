//! Conversions to `bool`

use super::{or_default, to_float, to_int, to_uint};
use crate::error::{ConvertError, Result, Target};
use crate::value::Value;

/// Strict conversion to `bool`
///
/// Succeeds only for `Value::Bool`. This is not a truthiness test; numbers
/// and strings are rejected with `UnsupportedType`. Use [`bool_force`] for
/// truthiness.
pub fn bool_value(value: &Value) -> Result<bool> {
    match value {
        Value::Null => Err(ConvertError::Absent),
        Value::Bool(b) => Ok(*b),
        other => Err(ConvertError::unsupported(Target::Bool, other)),
    }
}

/// [`bool_value`], or `default` on any error
pub fn bool_default(value: &Value, default: bool) -> bool {
    or_default(Target::Bool, value, bool_value(value), default)
}

/// [`bool_value`], or `false` on any error
pub fn to_bool(value: &Value) -> bool {
    bool_default(value, false)
}

/// Best-effort truthiness; never fails
///
/// - `Null` is false
/// - numbers are true iff nonzero (`NaN` counts as nonzero)
/// - strings, bytes, arrays, queues and objects are true iff non-empty
/// - anything else (functions) is true
pub fn bool_force(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int8(_) | Value::Int16(_) | Value::Int32(_) | Value::Int64(_) => to_int(value) != 0,
        Value::Uint8(_) | Value::Uint16(_) | Value::Uint32(_) | Value::Uint64(_) => {
            to_uint(value) != 0
        }
        Value::Float32(_) | Value::Float64(_) => to_float(value) != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Bytes(b) => !b.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Queue(q) => !q.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Func(_) => true,
    }
}
