//! Rendering of rules and dates for display.

mod long_date;
mod rrule_text;

pub use long_date::{format_long_date, ordinal_suffix};
