//! Input validation for `/hash` query parameters
//!
//! Checks run in a fixed order and the first failure wins. Nothing here
//! hashes or renders; callers only proceed once these return `Ok`.

use crate::error::RequestError;

/// Maximum accepted length of any parameter, in UTF-8 bytes.
pub const MAX_INPUT_LENGTH: usize = 10_000;

/// Length of a SHA-256 digest rendered as hex.
pub const HASH_HEX_LENGTH: usize = 64;

/// Check that a parameter is present and within [`MAX_INPUT_LENGTH`].
///
/// Returns the value back so the caller can keep working with it.
pub fn validate_input<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, RequestError> {
    let value = value.ok_or(RequestError::Missing { field })?;

    if value.len() > MAX_INPUT_LENGTH {
        return Err(RequestError::TooLong { field });
    }

    Ok(value)
}

/// Check that `hash` looks like a SHA-256 hex digest (either case).
///
/// Expects an already-trimmed value.
pub fn validate_hash_format(hash: &str) -> Result<(), RequestError> {
    if hash.len() != HASH_HEX_LENGTH {
        return Err(RequestError::InvalidHashLength);
    }

    if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RequestError::InvalidHashCharacters);
    }

    Ok(())
}

/// `Some(value)` when the parameter carries something other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
