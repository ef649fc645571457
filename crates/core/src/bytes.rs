//! Zero-copy views between text and bytes
//!
//! Both functions borrow the input; nothing is allocated or copied.

use crate::error::{ConvertError, Result, Target};

/// View `bytes` as text
///
/// Returns a `Parse` error when `bytes` is not valid UTF-8.
pub fn bytes_as_str(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::parse(Target::String, &String::from_utf8_lossy(bytes), e))
}

/// View `s` as bytes
pub fn str_as_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}
