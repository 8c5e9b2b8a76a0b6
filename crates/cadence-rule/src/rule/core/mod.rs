//! Recurrence rule core models.
//!
//! These types are designed for:
//! - Closed variants: every frequency the form offers is an enum arm
//! - Immutability: edits produce a new `RecurrenceRule` value
//! - Type safety: weekday indices are checked once, at construction

mod frequency;
mod recurrence;
mod weekday;

pub use frequency::Frequency;
pub use recurrence::RecurrenceRule;
pub use weekday::Weekday;
