//! Core types and conversions for dynconv
//!
//! This crate defines:
//! - Value: Tagged union over every input kind (absence, bool, sized
//!   integers and floats, strings, containers, functions)
//! - Error: `ConvertError` taxonomy (absent, unsupported type, parse)
//! - Conversions: `*_value`, `*_default`, `to_*` and `*_force` for bool,
//!   i64, u64, f64 and String
//! - Views: zero-copy byte/str borrowing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod convert;
pub mod error;
mod render;
pub mod value;

pub use bytes::{bytes_as_str, str_as_bytes};
pub use convert::{
    bool_default, bool_force, bool_value, float_default, float_value, int_default, int_value,
    string_default, string_force, string_value, to_bool, to_float, to_int, to_string, to_uint,
    uint_default, uint_value,
};
pub use error::{ConvertError, ParseError, Result, Target};
pub use value::{Callable, Value};
