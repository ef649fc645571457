//! Conversions to `i64`

use super::{or_default, to_float, to_uint};
use crate::error::{ConvertError, Result, Target};
use crate::value::Value;

/// Strict conversion to `i64`
///
/// - `Bool` maps to 1 or 0
/// - signed widths are sign-extended
/// - unsigned widths go through [`to_uint`] and are bit-cast, so values
///   above `i64::MAX` wrap to negative
/// - floats go through [`to_float`] and are truncated toward zero; values
///   outside the `i64` range saturate and `NaN` becomes 0
/// - strings are parsed as base-10 with an optional sign; a decimal point
///   is a parse error
pub fn int_value(value: &Value) -> Result<i64> {
    match value {
        Value::Null => Err(ConvertError::Absent),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Int8(i) => Ok(i64::from(*i)),
        Value::Int16(i) => Ok(i64::from(*i)),
        Value::Int32(i) => Ok(i64::from(*i)),
        Value::Int64(i) => Ok(*i),
        Value::Uint8(_) | Value::Uint16(_) | Value::Uint32(_) | Value::Uint64(_) => {
            Ok(to_uint(value) as i64)
        }
        Value::Float32(_) | Value::Float64(_) => Ok(to_float(value) as i64),
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|e| ConvertError::parse(Target::Int, s, e)),
        other => Err(ConvertError::unsupported(Target::Int, other)),
    }
}

/// [`int_value`], or `default` on any error
pub fn int_default(value: &Value, default: i64) -> i64 {
    or_default(Target::Int, value, int_value(value), default)
}

/// [`int_value`], or 0 on any error
pub fn to_int(value: &Value) -> i64 {
    int_default(value, 0)
}
