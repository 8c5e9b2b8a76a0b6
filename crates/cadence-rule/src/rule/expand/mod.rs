//! Recurrence expansion.
//!
//! This module turns a validated recurrence rule into the ascending list of
//! calendar dates it produces inside its `[start_date, end_date]` window.

mod expander;
mod preview;

pub use expander::{RecurrenceExpander, expand};
pub use preview::PreviewDateList;
