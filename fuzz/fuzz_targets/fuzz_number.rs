//! Fuzz target for card number validation and classification.
//!
//! Tests that neither ever panics on arbitrary input.

#![no_main]

use card_validation::{number, payment_system_type, CardNumber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = number::validate_number(Some(data));
    let _ = number::is_valid_number(data);
    let _ = payment_system_type(data);

    if let Some(parsed) = CardNumber::parse(data) {
        let _ = parsed.masked();
        let _ = parsed.last_four();
        let _ = format!("{:?}", parsed);
    }
});
