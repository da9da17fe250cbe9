//! Core card types: the payment system enum and the card number value.
//!
//! This module provides the `PaymentSystemType` enum identifying the
//! supported card networks and the `CardNumber` value type holding a parsed
//! number securely.

use std::fmt;
use zeroize::Zeroize;

/// Supported payment systems (card networks).
///
/// A closed set: classification resolves to exactly one of these or fails.
/// There is deliberately no `Unknown` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentSystemType {
    /// Visa - prefix 4, lengths 13 and 16
    Visa,
    /// MasterCard - prefix 51-55 or 2221-2720, length 16
    MasterCard,
    /// American Express - prefix 34 or 37, length 15
    AmericanExpress,
}

impl PaymentSystemType {
    /// Returns the numeric wire code for this payment system.
    ///
    /// These are the codes the validation endpoint serializes on success:
    /// Visa = 10, MasterCard = 20, American Express = 30.
    #[inline]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Visa => 10,
            Self::MasterCard => 20,
            Self::AmericanExpress => 30,
        }
    }

    /// Returns the accepted number lengths for this payment system.
    ///
    /// Visa is limited to 13 and 16 digits; 19-digit Visa numbers exist in
    /// the wild but are not accepted (see `number::is_visa`).
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::MasterCard => &[16],
            Self::AmericanExpress => &[15],
        }
    }

    /// Returns true if the given length is accepted for this payment system.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns a human-readable name for the payment system.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
        }
    }
}

impl fmt::Display for PaymentSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// A parsed card number with secure memory handling.
///
/// Digits are stored in a fixed-size array that is zeroed when the value is
/// dropped. `Debug` and `Display` show a masked rendering only, so the type
/// is safe to log.
///
/// Construction enforces the digits-only, 12-19 length invariant of the
/// data model; it does not imply the number is valid for any network.
#[derive(Clone)]
pub struct CardNumber {
    /// The digits (0-9 values, not ASCII).
    digits: [u8; MAX_CARD_DIGITS],
    /// Number of actual digits.
    digit_count: u8,
}

impl CardNumber {
    /// Parses a raw string into a `CardNumber`.
    ///
    /// Returns `None` if the input contains any non-digit character or its
    /// length is outside 12-19. Separators are not tolerated: the engine
    /// receives bare digit strings.
    pub fn parse(input: &str) -> Option<Self> {
        let len = input.len();
        if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&len) {
            return None;
        }

        let mut digits = [0u8; MAX_CARD_DIGITS];
        for (i, c) in input.chars().enumerate() {
            if !c.is_ascii_digit() {
                return None;
            }
            digits[i] = (c as u8) - b'0';
        }

        Some(Self {
            digits,
            digit_count: len as u8,
        })
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the digits as a slice (0-9 values).
    ///
    /// Exposes the full number; never log the result. Prefer `masked()` for
    /// anything user- or operator-facing.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }

    /// Returns the last four digits as a string.
    ///
    /// Safe for logging and display.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.digit_count as usize;
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number with all but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(self.digits())
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask the number in debug output
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
