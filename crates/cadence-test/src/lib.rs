//! Cadence recurring date picker - integration test support.
//!
//! Shared fixtures for the tests under `tests/`, which exercise the public
//! API of the workspace crates.

use chrono::NaiveDate;

/// ## Summary
/// Builds a calendar date for fixtures.
///
/// ## Panics
/// Panics if the date does not exist.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture dates are literals")]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date should exist")
}
