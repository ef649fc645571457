//! dynconv - Coercion of dynamically typed values
//!
//! Turns a [`Value`] of unknown kind into a `bool`, `i64`, `u64`, `f64` or
//! `String`, with one policy per call site:
//!
//! - `*_value`: strict, returns [`ConvertError`] on failure
//! - `*_default`: falls back to a caller-supplied value
//! - `to_*`: falls back to the target's zero value
//! - `bool_force` / `string_force`: total best-effort coercion
//!
//! # Quick Start
//!
//! ```
//! use dynconv::{int_value, string_force, to_bool, Value};
//!
//! assert_eq!(int_value(&Value::from("-123")), Ok(-123));
//! assert!(int_value(&Value::from("-123.45")).is_err());
//! assert!(!to_bool(&Value::from("true")));
//! assert_eq!(string_force(&Value::Float64(1.5)), "1.5");
//! ```
//!
//! The implementation lives in `dynconv-core`; this crate re-exports its
//! public API.

// Re-export the public API from dynconv-core
pub use dynconv_core::*;
