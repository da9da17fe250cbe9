//! Payment system classification from a card number.
//!
//! Applies the same prefix/length shapes as number validation, in the fixed
//! order Visa, MasterCard, American Express, and returns the first match.
//! Classification is only meant to run on numbers that already passed
//! validation; a miss is a contract violation, not a user-facing outcome.
//!
//! # Example
//!
//! ```
//! use card_validation::detect::payment_system_type;
//! use card_validation::PaymentSystemType;
//!
//! assert_eq!(
//!     payment_system_type("4321432143214321").unwrap(),
//!     PaymentSystemType::Visa
//! );
//! assert!(payment_system_type("1111111111111111").is_err());
//! ```

use crate::card::{CardNumber, PaymentSystemType};
use crate::error::ValidationError;
use crate::number::{is_american_express, is_master_card, is_visa};

/// Classifies a card number into its payment system.
///
/// Checks Visa, then MasterCard, then American Express; the first shape
/// satisfied wins. Returns `Err(ValidationError::UnrecognizedNetwork)` when
/// none match - including for inputs that would not even parse as a card
/// number.
pub fn payment_system_type(input: &str) -> Result<PaymentSystemType, ValidationError> {
    let number = CardNumber::parse(input).ok_or(ValidationError::UnrecognizedNetwork)?;
    classify(number.digits())
}

/// Classifies a digit slice into its payment system.
#[inline]
pub fn classify(digits: &[u8]) -> Result<PaymentSystemType, ValidationError> {
    if is_visa(digits) {
        Ok(PaymentSystemType::Visa)
    } else if is_master_card(digits) {
        Ok(PaymentSystemType::MasterCard)
    } else if is_american_express(digits) {
        Ok(PaymentSystemType::AmericanExpress)
    } else {
        Err(ValidationError::UnrecognizedNetwork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_visa() {
        assert_eq!(
            payment_system_type("4321432143214321").unwrap(),
            PaymentSystemType::Visa
        );
        assert_eq!(
            payment_system_type("4321432143211").unwrap(),
            PaymentSystemType::Visa
        );
    }

    #[test]
    fn test_classify_mastercard() {
        assert_eq!(
            payment_system_type("5555555555444444").unwrap(),
            PaymentSystemType::MasterCard
        );
        assert_eq!(
            payment_system_type("2221000000000009").unwrap(),
            PaymentSystemType::MasterCard
        );
    }

    #[test]
    fn test_classify_american_express() {
        assert_eq!(
            payment_system_type("371449635398431").unwrap(),
            PaymentSystemType::AmericanExpress
        );
        assert_eq!(
            payment_system_type("348774081201057").unwrap(),
            PaymentSystemType::AmericanExpress
        );
    }

    #[test]
    fn test_unrecognized_number_is_error() {
        let err = payment_system_type("1111111111111111").unwrap_err();
        assert_eq!(err, ValidationError::UnrecognizedNetwork);
    }

    #[test]
    fn test_unparseable_input_is_error() {
        assert_eq!(
            payment_system_type("").unwrap_err(),
            ValidationError::UnrecognizedNetwork
        );
        assert_eq!(
            payment_system_type("abcdabcdabcdabcd").unwrap_err(),
            ValidationError::UnrecognizedNetwork
        );
    }

    #[test]
    fn test_wrong_length_for_prefix_is_error() {
        // Visa prefix but 15 digits matches no shape
        assert_eq!(
            payment_system_type("411111111111111").unwrap_err(),
            ValidationError::UnrecognizedNetwork
        );
    }
}
