//! Conversions to `f64`

use super::{or_default, to_int, to_uint};
use crate::error::{ConvertError, ParseError, Result, Target};
use crate::value::Value;

/// Strict conversion to `f64`
///
/// `Float32` is widened exactly with `f64::from`, so the result carries the
/// 32-bit value's bit pattern rather than its decimal spelling:
/// `Float32(123.45)` gives `123.44999694824219`, not `123.45`.
///
/// Strings accept integer, fractional and exponent forms with an optional
/// sign, plus `inf`, `infinity` and `nan` in any case. A finite literal that
/// overflows `f64` is rejected with `ParseError::OutOfRange`.
pub fn float_value(value: &Value) -> Result<f64> {
    match value {
        Value::Null => Err(ConvertError::Absent),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Float32(f) => Ok(f64::from(*f)),
        Value::Float64(f) => Ok(*f),
        Value::Int8(_) | Value::Int16(_) | Value::Int32(_) | Value::Int64(_) => {
            Ok(to_int(value) as f64)
        }
        Value::Uint8(_) | Value::Uint16(_) | Value::Uint32(_) | Value::Uint64(_) => {
            Ok(to_uint(value) as f64)
        }
        Value::String(s) => parse_float(s),
        other => Err(ConvertError::unsupported(Target::Float, other)),
    }
}

fn parse_float(s: &str) -> Result<f64> {
    let f = s
        .parse::<f64>()
        .map_err(|e| ConvertError::parse(Target::Float, s, e))?;
    if f.is_infinite() && !is_infinity_literal(s) {
        return Err(ConvertError::parse(Target::Float, s, ParseError::OutOfRange));
    }
    Ok(f)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// [`float_value`], or `default` on any error
pub fn float_default(value: &Value, default: f64) -> f64 {
    or_default(Target::Float, value, float_value(value), default)
}

/// [`float_value`], or 0.0 on any error
pub fn to_float(value: &Value) -> f64 {
    float_default(value, 0.0)
}
