//! Error types for card validation.
//!
//! Malformed user input is never an error here - validators answer those
//! cases with a plain `false`. The variants below signal caller bugs.

use std::fmt;

/// Errors raised by the validation engine.
///
/// Both variants indicate misuse of the API rather than bad user data:
/// callers must not pass absent input, and classification must only be
/// attempted on numbers that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required argument was absent.
    ///
    /// Absent is distinct from empty: an empty string is an ordinary
    /// validation reject, not an error.
    NullInput {
        /// The name of the missing parameter.
        param: &'static str,
    },

    /// The card number matches no supported network shape.
    ///
    /// Raised only by classification. A number that reaches classification
    /// without matching Visa, MasterCard, or American Express violates the
    /// contract between validation and classification; there is no
    /// "unknown network" value to fall back to.
    UnrecognizedNetwork,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullInput { param } => {
                write!(f, "value cannot be null (parameter '{}')", param)
            }
            Self::UnrecognizedNetwork => {
                write!(f, "card number matches no supported payment system")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
