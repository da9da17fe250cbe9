//! Masking utilities for safe display and logging of card numbers.
//!
//! Full card numbers must never appear in logs or error output. These
//! helpers render a number with only the last four digits visible.

/// Masks a digit slice showing only the last 4 digits.
///
/// Format: `****-****-****-1234`, grouped in fours.
#[inline]
pub(crate) fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count % 4 == 0 {
        result.push('-');
    }

    for &d in &digits[len - 4..] {
        result.push((b'0' + d) as char);
    }

    result
}

/// Masks a raw card number string.
///
/// Strips non-digit characters and shows only the last four digits. Useful
/// at the HTTP boundary where the input has not been parsed yet.
///
/// # Example
///
/// ```
/// use card_validation::mask::mask_string;
///
/// assert_eq!(mask_string("4111111111111111"), "****-****-****-1111");
/// ```
#[inline]
pub fn mask_string(input: &str) -> String {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();
    mask_digits(&digits)
}

/// Extracts just the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
#[inline]
pub fn last_four_from_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
