//! Facade integration tests
//!
//! Exercises the API re-exported by the root crate:
//! - strict: `*_value` error taxonomy
//! - fallback: `*_default` and `to_*`
//! - force: `bool_force` and `string_force`

mod fallback;
mod force;
mod strict;
