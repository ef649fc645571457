//! Error types for value conversion
//!
//! This module defines the error taxonomy reported by the strict `*_value`
//! conversions. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! ## Taxonomy
//!
//! - `Absent`: the input was `Value::Null`
//! - `UnsupportedType`: the input's variant has no rule for the target type
//! - `Parse`: the input was text that does not match the target's grammar

use crate::value::Value;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// The type a conversion was asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `bool`
    Bool,
    /// `i64`
    Int,
    /// `u64`
    Uint,
    /// `f64`
    Float,
    /// `String`
    String,
}

impl Target {
    /// Get the target name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Bool => "bool",
            Target::Int => "int",
            Target::Uint => "uint",
            Target::Float => "float",
            Target::String => "string",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying cause of a `ConvertError::Parse`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Integer grammar mismatch or overflow
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Float grammar mismatch
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Bytes are not valid UTF-8
    #[error(transparent)]
    Utf8(#[from] Utf8Error),

    /// A sign was given where the grammar has none (unsigned integers)
    #[error("sign not allowed")]
    UnexpectedSign,

    /// A finite literal whose magnitude does not fit the target
    #[error("value out of range")]
    OutOfRange,
}

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input was the absence marker (`Value::Null`)
    #[error("value is null")]
    Absent,

    /// Input variant has no conversion rule to the target
    #[error("unexpected type of {target} value, got {found}")]
    UnsupportedType {
        /// Requested target
        target: Target,
        /// Kind name of the rejected input
        found: &'static str,
    },

    /// Input text did not lexically match the target's grammar
    #[error("cannot parse {input:?} as {target}: {source}")]
    Parse {
        /// Requested target
        target: Target,
        /// The rejected text
        input: String,
        /// Underlying parse failure
        #[source]
        source: ParseError,
    },
}

impl ConvertError {
    /// Build an `UnsupportedType` error for `value`
    pub fn unsupported(target: Target, value: &Value) -> Self {
        ConvertError::UnsupportedType {
            target,
            found: value.type_name(),
        }
    }

    /// Build a `Parse` error for `input`
    pub fn parse(target: Target, input: &str, source: impl Into<ParseError>) -> Self {
        ConvertError::Parse {
            target,
            input: input.to_string(),
            source: source.into(),
        }
    }

    /// Check if this is an `Absent` error
    pub fn is_absent(&self) -> bool {
        matches!(self, ConvertError::Absent)
    }

    /// Check if this is an `UnsupportedType` error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, ConvertError::UnsupportedType { .. })
    }

    /// Check if this is a `Parse` error
    pub fn is_parse(&self) -> bool {
        matches!(self, ConvertError::Parse { .. })
    }

    /// The target of the failed conversion, if the error records one
    pub fn target(&self) -> Option<Target> {
        match self {
            ConvertError::Absent => None,
            ConvertError::UnsupportedType { target, .. } | ConvertError::Parse { target, .. } => {
                Some(*target)
            }
        }
    }
}
