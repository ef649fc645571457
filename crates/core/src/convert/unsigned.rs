//! Conversions to `u64`

use super::{or_default, to_float, to_int};
use crate::error::{ConvertError, ParseError, Result, Target};
use crate::value::Value;

/// Strict conversion to `u64`
///
/// Signed input is reinterpreted, not range-checked: `Int8(-1)` becomes
/// `u64::MAX`. Floats are truncated toward zero; negative floats and `NaN`
/// become 0 and values above `u64::MAX` saturate. Strings must be plain
/// base-10 digits; any sign is a parse error.
pub fn uint_value(value: &Value) -> Result<u64> {
    match value {
        Value::Null => Err(ConvertError::Absent),
        Value::Bool(b) => Ok(u64::from(*b)),
        Value::Uint8(u) => Ok(u64::from(*u)),
        Value::Uint16(u) => Ok(u64::from(*u)),
        Value::Uint32(u) => Ok(u64::from(*u)),
        Value::Uint64(u) => Ok(*u),
        Value::Int8(_) | Value::Int16(_) | Value::Int32(_) | Value::Int64(_) => {
            Ok(to_int(value) as u64)
        }
        Value::Float32(_) | Value::Float64(_) => Ok(to_float(value) as u64),
        Value::String(s) => parse_uint(s),
        other => Err(ConvertError::unsupported(Target::Uint, other)),
    }
}

fn parse_uint(s: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+'
    if s.starts_with('+') {
        return Err(ConvertError::parse(Target::Uint, s, ParseError::UnexpectedSign));
    }
    s.parse::<u64>()
        .map_err(|e| ConvertError::parse(Target::Uint, s, e))
}

/// [`uint_value`], or `default` on any error
pub fn uint_default(value: &Value, default: u64) -> u64 {
    or_default(Target::Uint, value, uint_value(value), default)
}

/// [`uint_value`], or 0 on any error
pub fn to_uint(value: &Value) -> u64 {
    uint_default(value, 0)
}
