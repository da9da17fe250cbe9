//! Fuzz target for issue date parsing and validation.

#![no_main]

use card_validation::issue_date::{self, IssueDate, MonthYear};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = issue_date::validate_issue_date(Some(data));

    let pinned = MonthYear::new(6, 2025).unwrap();
    let _ = issue_date::validate_issue_date_at(Some(data), pinned);

    // If parsing succeeds, exercise the value
    if let Some(date) = IssueDate::parse(data) {
        let _ = date.is_expired_at(pinned);
        let _ = date.to_string();
    }
});
