//! CVC (card verification code) validation.
//!
//! A CVC is exactly 3 or 4 ASCII digits. The engine does not tie CVC length
//! to the card's network: a 4-digit CVC is structurally valid even for
//! networks that only issue 3-digit codes. This permissive gap is part of
//! the documented contract - `validate_cvc_for_network` exists as the
//! opt-in strict check, but nothing in the default request path calls it.
//!
//! # Example
//!
//! ```
//! use card_validation::cvc::validate_cvc;
//!
//! assert!(validate_cvc("123"));
//! assert!(validate_cvc("1234"));
//! assert!(!validate_cvc("12"));
//! assert!(!validate_cvc("abc"));
//! ```

use crate::card::PaymentSystemType;

/// Checks whether a string is a well-formed CVC: exactly 3 or 4 digits.
///
/// Unlike the owner, number, and date validators, this takes the input
/// directly - the boundary scenario never passes an absent CVC through.
#[inline]
pub fn validate_cvc(input: &str) -> bool {
    matches!(input.len(), 3 | 4) && input.chars().all(|c| c.is_ascii_digit())
}

/// Returns the CVC length a network actually issues.
///
/// American Express prints 4 digits on the front; the others use 3.
#[inline]
pub const fn cvc_length_for_network(network: PaymentSystemType) -> usize {
    match network {
        PaymentSystemType::AmericanExpress => 4,
        _ => 3,
    }
}

/// Strict variant: checks the CVC against the network's issued length.
///
/// Not wired into the validation engine. Whether a 4-digit CVC should be
/// rejected for Visa remains an open question; callers that want the
/// strict behavior opt in here.
#[inline]
pub fn validate_cvc_for_network(input: &str, network: PaymentSystemType) -> bool {
    validate_cvc(input) && input.len() == cvc_length_for_network(network)
}
