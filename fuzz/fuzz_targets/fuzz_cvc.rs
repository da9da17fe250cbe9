//! Fuzz target for CVC validation.

#![no_main]

use card_validation::{cvc, PaymentSystemType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = cvc::validate_cvc(data);
    let _ = cvc::validate_cvc_for_network(data, PaymentSystemType::Visa);
    let _ = cvc::validate_cvc_for_network(data, PaymentSystemType::AmericanExpress);
});
