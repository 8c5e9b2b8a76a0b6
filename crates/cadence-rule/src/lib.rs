//! Recurrence rules for the cadence date picker.
//!
//! A [`rule::core::RecurrenceRule`] is validated and expanded into the
//! concrete calendar dates it produces within its bounded date window.

pub mod error;
pub mod rule;
