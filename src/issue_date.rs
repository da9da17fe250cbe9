//! Issue date validation.
//!
//! An issue date is accepted in exactly two textual forms, `MM/YY` or
//! `MM/YYYY`, with `MM` in `01`-`12` and the year all digits. Two-digit
//! years are interpreted as the 2000s. A card is valid through the end of
//! its month, so the current month/year or any later month/year passes.
//!
//! The "now" used for the expiry comparison is injectable: the plain
//! validators read the wall clock, the `_at` variants take a pinned
//! [`MonthYear`] so tests are deterministic.
//!
//! # Example
//!
//! ```
//! use card_validation::issue_date::{validate_issue_date_at, MonthYear};
//!
//! let now = MonthYear::new(6, 2025).unwrap();
//! assert!(validate_issue_date_at(Some("06/2025"), now).unwrap());
//! assert!(validate_issue_date_at(Some("12/25"), now).unwrap());
//! assert!(!validate_issue_date_at(Some("05/2025"), now).unwrap());
//! assert!(!validate_issue_date_at(Some("13/2025"), now).unwrap());
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ValidationError;

/// A month/year point in time, used as the injectable "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    /// Month (1-12)
    month: u8,
    /// Four-digit year
    year: u16,
}

impl MonthYear {
    /// Creates a month/year pair.
    ///
    /// Returns `None` if the month is not 1-12.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Reads the current month/year from the system clock.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        // Approximate calendar math from the epoch; good enough for a
        // month-granularity expiry comparison
        let days = secs / 86400;
        let years = days / 365;
        let year = 1970 + years as u16;

        let day_of_year = days % 365;
        let month = (day_of_year / 30).min(11) as u8 + 1;

        Self { month, year }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// A parsed issue date.
///
/// Represents the card's validity cutoff: the card is usable through the
/// end of this month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year
    year: u16,
}

impl IssueDate {
    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Parses a date in exactly `MM/YY` or `MM/YYYY` form.
    ///
    /// Unlike lenient expiry parsers, nothing else is tolerated: no
    /// trimming, no alternate separators, no trailing characters
    /// ("01/2025extra" rejects). Two-digit years map to 2000 + YY.
    pub fn parse(input: &str) -> Option<Self> {
        // Work on bytes: any multibyte character fails the digit checks
        // before a string slice could split it
        let bytes = input.as_bytes();
        if !matches!(bytes.len(), 5 | 7) {
            return None;
        }
        if bytes[2] != b'/' {
            return None;
        }

        let (month_part, year_part) = (&bytes[..2], &bytes[3..]);
        if !month_part.iter().all(u8::is_ascii_digit)
            || !year_part.iter().all(u8::is_ascii_digit)
        {
            return None;
        }

        let month = (month_part[0] - b'0') * 10 + (month_part[1] - b'0');
        if !(1..=12).contains(&month) {
            return None;
        }

        let mut year: u16 = year_part
            .iter()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'));
        if year_part.len() == 2 {
            // Two-digit years are the 2000s century
            year += 2000;
        }

        Some(Self { month, year })
    }

    /// Returns true if this date is strictly before the given month/year.
    ///
    /// The card is valid through the end of its month, so equality is not
    /// expired.
    #[inline]
    pub fn is_expired_at(&self, now: MonthYear) -> bool {
        (self.year, self.month) < (now.year, now.month)
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Validates an issue date string against the system clock.
///
/// Returns `Err(ValidationError::NullInput)` when the input is absent;
/// malformed or expired dates reject with `Ok(false)`.
pub fn validate_issue_date(input: Option<&str>) -> Result<bool, ValidationError> {
    validate_issue_date_at(input, MonthYear::now())
}

/// Validates an issue date string against a pinned "now".
///
/// This is the deterministic entry point for tests and for callers that
/// supply their own clock.
pub fn validate_issue_date_at(
    input: Option<&str>,
    now: MonthYear,
) -> Result<bool, ValidationError> {
    let input = input.ok_or(ValidationError::NullInput { param: "input" })?;
    Ok(is_valid_issue_date_at(input, now))
}

/// Checks a date string against a pinned "now" without the null-check layer.
#[inline]
pub fn is_valid_issue_date_at(input: &str, now: MonthYear) -> bool {
    match IssueDate::parse(input) {
        Some(date) => !date.is_expired_at(now),
        None => false,
    }
}
