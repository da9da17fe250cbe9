//! # card_validation
//!
//! Payment card input validation and network classification.
//!
//! Given raw strings for the cardholder name, card number, issue date, and
//! CVC, this crate answers whether each field is well formed and which
//! payment system issued the number. Every validator is a pure, stateless
//! function; the crate holds no state and performs no I/O beyond reading
//! the clock for the expiry comparison (and even that is injectable).
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validation::{
//!     validate_owner, validate_number, validate_cvc, payment_system_type,
//!     PaymentSystemType,
//! };
//!
//! assert!(validate_owner(Some("Will Smith")).unwrap());
//! assert!(validate_number(Some("4111111111111111")).unwrap());
//! assert!(validate_cvc("123"));
//!
//! let system = payment_system_type("4111111111111111").unwrap();
//! assert_eq!(system, PaymentSystemType::Visa);
//! assert_eq!(system.code(), 10);
//! ```
//!
//! ## Issue Dates
//!
//! Dates are accepted as `MM/YY` or `MM/YYYY` and are valid through the end
//! of their month. Pin "now" for deterministic checks:
//!
//! ```rust
//! use card_validation::issue_date::{validate_issue_date_at, MonthYear};
//!
//! let now = MonthYear::new(3, 2025).unwrap();
//! assert!(validate_issue_date_at(Some("03/2025"), now).unwrap());
//! assert!(!validate_issue_date_at(Some("02/25"), now).unwrap());
//! ```
//!
//! ## Supported Payment Systems
//!
//! | System | Prefix | Length | Code |
//! |--------|--------|--------|------|
//! | Visa | 4 | 13, 16 | 10 |
//! | MasterCard | 51-55, 2221-2720 | 16 | 20 |
//! | American Express | 34, 37 | 15 | 30 |
//!
//! Two deliberate contract quirks, preserved rather than fixed:
//!
//! - 19-digit Visa numbers are rejected even though they exist in the wild.
//! - A 4-digit CVC is accepted for every network; the strict per-network
//!   check is available as [`cvc::validate_cvc_for_network`] but is not
//!   part of the engine path.
//!
//! ## Errors
//!
//! Malformed user input is a `false` verdict, never an error. The only
//! errors are [`ValidationError::NullInput`] (a required argument was
//! absent - a caller bug) and [`ValidationError::UnrecognizedNetwork`]
//! (classification ran on a number matching no supported shape).
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `server` | REST API (axum) with Swagger UI |
//!
//! ## Security
//!
//! - Card numbers are stored in fixed-size arrays and zeroized on drop
//! - `Debug` and `Display` for card numbers show masked digits only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "server")]
pub mod api;
pub mod card;
pub mod cvc;
pub mod detect;
pub mod error;
pub mod issue_date;
pub mod mask;
pub mod number;
pub mod owner;

// Re-export main types and operations at crate root
pub use card::{CardNumber, PaymentSystemType, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use cvc::validate_cvc;
pub use detect::payment_system_type;
pub use error::ValidationError;
pub use issue_date::{validate_issue_date, validate_issue_date_at, IssueDate, MonthYear};
pub use number::validate_number;
pub use owner::validate_owner;

#[cfg(test)]
mod tests {
    use super::*;

    // Card numbers from the standard test card lists
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4321432143211";
    const MASTERCARD: &str = "5555555555554444";
    const MASTERCARD_2SERIES: &str = "2223000048400011";
    const AMEX: &str = "371449635398431";

    #[test]
    fn test_visa_validation() {
        assert!(validate_number(Some(VISA_16)).unwrap());
        assert!(validate_number(Some(VISA_13)).unwrap());
        assert_eq!(
            payment_system_type(VISA_16).unwrap(),
            PaymentSystemType::Visa
        );
    }

    #[test]
    fn test_mastercard_validation() {
        assert!(validate_number(Some(MASTERCARD)).unwrap());
        assert!(validate_number(Some(MASTERCARD_2SERIES)).unwrap());
        assert_eq!(
            payment_system_type(MASTERCARD).unwrap(),
            PaymentSystemType::MasterCard
        );
    }

    #[test]
    fn test_amex_validation() {
        assert!(validate_number(Some(AMEX)).unwrap());
        assert_eq!(
            payment_system_type(AMEX).unwrap(),
            PaymentSystemType::AmericanExpress
        );
    }

    #[test]
    fn test_owner_validation() {
        assert!(validate_owner(Some("Will Smith")).unwrap());
        assert!(!validate_owner(Some("Will Smith Second First")).unwrap());
    }

    #[test]
    fn test_cvc_validation() {
        assert!(validate_cvc("123"));
        assert!(validate_cvc("1234"));
        assert!(!validate_cvc("12"));
    }

    #[test]
    fn test_null_inputs_are_errors() {
        assert!(validate_owner(None).is_err());
        assert!(validate_number(None).is_err());
        assert!(validate_issue_date(None).is_err());
    }

    #[test]
    fn test_classification_error() {
        assert_eq!(
            payment_system_type("1111111111111111").unwrap_err(),
            ValidationError::UnrecognizedNetwork
        );
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumber>();
        assert_send_sync::<PaymentSystemType>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<IssueDate>();
        assert_send_sync::<MonthYear>();
    }
}
