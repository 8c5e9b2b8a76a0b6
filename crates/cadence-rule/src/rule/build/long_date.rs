//! Long human-readable date format, e.g. `July 19th, 2025`.

use chrono::{Datelike, NaiveDate};

/// Returns the English ordinal suffix for a day of the month.
#[must_use]
pub const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// ## Summary
/// Formats a date as full month name, ordinal day and year.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}
