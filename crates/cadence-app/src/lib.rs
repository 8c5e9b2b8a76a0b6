//! Cadence recurring date picker.
//!
//! The [`form::RecurrenceForm`] session holds what the picker shows: the
//! rule being edited, the last validation messages and the last preview.

pub mod form;
