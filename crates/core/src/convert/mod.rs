//! Conversion functions
//!
//! Every target type has the same family of operations:
//! - `*_value`: strict, reports `ConvertError`
//! - `*_default`: strict conversion, falling back to a caller-supplied value
//! - `to_*`: `*_default` with the target's zero value
//!
//! `bool` and `String` additionally have a `*_force` variant that never fails.
//!
//! All functions are pure and match on the input variant; none of them panic.

pub mod boolean;
pub mod float;
pub mod integer;
pub mod string;
pub mod unsigned;

pub use boolean::{bool_default, bool_force, bool_value, to_bool};
pub use float::{float_default, float_value, to_float};
pub use integer::{int_default, int_value, to_int};
pub use string::{string_default, string_force, string_value, to_string};
pub use unsigned::{to_uint, uint_default, uint_value};

use crate::error::{Result, Target};
use crate::value::Value;
use tracing::trace;

/// Unwrap a strict result, swallowing any error into `default`
pub(crate) fn or_default<T>(target: Target, value: &Value, result: Result<T>, default: T) -> T {
    match result {
        Ok(v) => v,
        Err(err) => {
            trace!(
                target_type = %target,
                kind = value.type_name(),
                error = %err,
                "conversion failed, using default"
            );
            default
        }
    }
}
