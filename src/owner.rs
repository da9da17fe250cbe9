//! Cardholder name validation.
//!
//! An owner name is 1 to 3 space-separated tokens, each made up solely of
//! ASCII letters. No digits, no punctuation, no hyphens, and no leading,
//! trailing, or doubled whitespace ("Will  " is a reject).
//!
//! # Example
//!
//! ```
//! use card_validation::owner::validate_owner;
//!
//! assert!(validate_owner(Some("Will Smith")).unwrap());
//! assert!(validate_owner(Some("smith")).unwrap());
//! assert!(!validate_owner(Some("Will Smith Second First")).unwrap());
//! assert!(validate_owner(None).is_err());
//! ```

use crate::error::ValidationError;

/// Validates a cardholder name.
///
/// Returns `Err(ValidationError::NullInput)` when the input is absent;
/// every malformed-but-present input is an ordinary `Ok(false)`.
pub fn validate_owner(input: Option<&str>) -> Result<bool, ValidationError> {
    let input = input.ok_or(ValidationError::NullInput { param: "input" })?;
    Ok(is_valid_owner(input))
}

/// Checks whether a string is a well-formed cardholder name.
///
/// Splitting on single spaces makes every whitespace rule fall out of the
/// token checks: a leading, trailing, or doubled space yields an empty
/// token, which rejects.
#[inline]
pub fn is_valid_owner(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let mut tokens = 0usize;
    for token in input.split(' ') {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        tokens += 1;
        if tokens > 3 {
            return false;
        }
    }

    tokens >= 1
}
