//! Canonical text rendering of values
//!
//! `Display` for [`Value`] is what `string_force` falls back to for anything
//! that is not already a string. Output is deterministic:
//! - scalars use their own `Display` (floats in shortest round-trip form)
//! - strings render raw, also when nested
//! - `Bytes` and `Array` render as `[e1 e2 ...]`, `Queue` as `chan[e1 e2 ...]`
//! - `Object` renders as `map[k1:v1 k2:v2 ...]` in ascending key order
//! - `Func` renders as `func(name)`

use crate::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int8(i) => write!(f, "{i}"),
            Value::Int16(i) => write!(f, "{i}"),
            Value::Int32(i) => write!(f, "{i}"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::Uint8(u) => write!(f, "{u}"),
            Value::Uint16(u) => write!(f, "{u}"),
            Value::Uint32(u) => write!(f, "{u}"),
            Value::Uint64(u) => write!(f, "{u}"),
            Value::Float32(x) => write!(f, "{x}"),
            Value::Float64(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) => write_seq(f, "", b.iter()),
            Value::Array(a) => write_seq(f, "", a.iter()),
            Value::Queue(q) => write_seq(f, "chan", q.iter()),
            Value::Object(o) => {
                f.write_str("map[")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Value::Func(c) => write!(f, "func({})", c.name()),
        }
    }
}

fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str(prefix)?;
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
