//! Fuzz target for owner name validation.

#![no_main]

use card_validation::owner;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = owner::validate_owner(Some(data));
    let _ = owner::is_valid_owner(data);
});
