//! Card number validation against the three supported network shapes.
//!
//! Each network has an exact digit-length and prefix rule:
//!
//! - **Visa**: starts with 4, exactly 13 or 16 digits
//! - **MasterCard**: exactly 16 digits, prefix 51-55 or 2221-2720
//! - **American Express**: starts with 34 or 37, exactly 15 digits
//!
//! The three shapes are checked independently; a number is valid if any one
//! matches. Prefix/length combinations cannot satisfy two shapes at once.
//!
//! # Example
//!
//! ```
//! use card_validation::number::validate_number;
//!
//! assert!(validate_number(Some("4111111111111111")).unwrap());
//! assert!(validate_number(Some("371449635398431")).unwrap());
//! assert!(!validate_number(Some("1111111111111111")).unwrap());
//! assert!(validate_number(None).is_err());
//! ```

use crate::card::CardNumber;
use crate::error::ValidationError;

/// Validates a card number string.
///
/// Returns `Err(ValidationError::NullInput)` when the input is absent.
/// Any string containing non-digit characters, or not matching one of the
/// three network shapes, rejects with `Ok(false)` - including empty input.
pub fn validate_number(input: Option<&str>) -> Result<bool, ValidationError> {
    let input = input.ok_or(ValidationError::NullInput { param: "input" })?;
    Ok(is_valid_number(input))
}

/// Checks whether a string matches any supported network shape.
#[inline]
pub fn is_valid_number(input: &str) -> bool {
    match CardNumber::parse(input) {
        Some(number) => {
            let digits = number.digits();
            is_visa(digits) || is_master_card(digits) || is_american_express(digits)
        }
        None => false,
    }
}

/// Visa: prefix 4, exactly 13 or 16 digits.
///
/// 19-digit Visa numbers are real but deliberately not accepted; the
/// contract pins the length set to {13, 16}.
#[inline]
pub fn is_visa(digits: &[u8]) -> bool {
    matches!(digits, [4, ..]) && matches!(digits.len(), 13 | 16)
}

/// MasterCard: exactly 16 digits, prefix 51-55 or in the 2221-2720 range.
#[inline]
pub fn is_master_card(digits: &[u8]) -> bool {
    if digits.len() != 16 {
        return false;
    }

    // Slice patterns cover the 2221-2720 series band by band
    matches!(
        digits,
        [5, 1..=5, ..]
            | [2, 2, 2, 1..=9, ..] // 2221-2229
            | [2, 2, 3..=9, _, ..] // 2230-2299
            | [2, 3..=6, _, _, ..] // 2300-2699
            | [2, 7, 0..=1, _, ..] // 2700-2719
            | [2, 7, 2, 0, ..] // 2720
    )
}

/// American Express: prefix 34 or 37, exactly 15 digits.
#[inline]
pub fn is_american_express(digits: &[u8]) -> bool {
    digits.len() == 15 && matches!(digits, [3, 4, ..] | [3, 7, ..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_visa_16_digits() {
        assert!(validate_number(Some("4321432143214321")).unwrap());
        assert!(validate_number(Some("4111111111111111")).unwrap());
    }

    #[test]
    fn test_visa_13_digits() {
        assert!(validate_number(Some("4321432143211")).unwrap());
    }

    #[test]
    fn test_visa_wrong_lengths() {
        assert!(!validate_number(Some("43214321432111")).unwrap()); // 14
        assert!(!validate_number(Some("432143214321")).unwrap()); // 12
        assert!(!validate_number(Some("411111111111111")).unwrap()); // 15, Visa prefix
    }

    #[test]
    fn test_visa_19_digits_rejected() {
        // Real-world valid, deliberately excluded here
        assert!(!validate_number(Some("4333333333333333333")).unwrap());
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        assert!(!validate_number(Some("1111111111111111")).unwrap());
    }

    #[test]
    fn test_mastercard_51_55_range() {
        assert!(validate_number(Some("5555555555554444")).unwrap());
        assert!(validate_number(Some("5105105105105100")).unwrap());
        assert!(validate_number(Some("5305105105105100")).unwrap());
    }

    #[test]
    fn test_mastercard_51_55_wrong_lengths() {
        assert!(!validate_number(Some("530510510510510")).unwrap()); // 15
        assert!(!validate_number(Some("53051051051051000")).unwrap()); // 17
    }

    #[test]
    fn test_mastercard_2_series_range() {
        assert!(validate_number(Some("2223000048400011")).unwrap());
        assert!(validate_number(Some("2720992716510043")).unwrap());
        assert!(validate_number(Some("2221000000000009")).unwrap());
    }

    #[test]
    fn test_mastercard_2_series_boundaries() {
        // 2220 and 2721 fall just outside the series
        assert!(!is_master_card(&digits_of("2220000000000000")));
        assert!(!is_master_card(&digits_of("2721000000000000")));
        assert!(is_master_card(&digits_of("2720000000000000")));
        assert!(is_master_card(&digits_of("2221000000000000")));
    }

    #[test]
    fn test_mastercard_2_series_wrong_lengths() {
        assert!(!validate_number(Some("222100000000000")).unwrap()); // 15
        assert!(!validate_number(Some("22210000000000000")).unwrap()); // 17
    }

    #[test]
    fn test_amex_15_digits() {
        assert!(validate_number(Some("371449635398431")).unwrap());
        assert!(validate_number(Some("348774081201057")).unwrap());
    }

    #[test]
    fn test_amex_wrong_lengths() {
        assert!(!validate_number(Some("34877408120105")).unwrap()); // 14
        assert!(!validate_number(Some("3487740812010555")).unwrap()); // 16
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(!validate_number(Some("abcdabcdabcdabcd")).unwrap());
        assert!(!validate_number(Some("abcdabcdabcdabcde")).unwrap());
        assert!(!validate_number(Some("abcdabcdabcdabc")).unwrap());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(!validate_number(Some("")).unwrap());
    }

    #[test]
    fn test_null_input_is_error() {
        let err = validate_number(None).unwrap_err();
        assert_eq!(err, ValidationError::NullInput { param: "input" });
    }

    #[test]
    fn test_shapes_are_disjoint_on_valid_cards() {
        for s in [
            "4321432143214321",
            "5555555555554444",
            "2221000000000009",
            "371449635398431",
        ] {
            let d = digits_of(s);
            let hits = [is_visa(&d), is_master_card(&d), is_american_express(&d)]
                .iter()
                .filter(|&&m| m)
                .count();
            assert_eq!(hits, 1, "exactly one shape should match {}", s);
        }
    }
}
