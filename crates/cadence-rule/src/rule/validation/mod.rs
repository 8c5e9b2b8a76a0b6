//! ## Summary
//! Input validation for recurrence rules.
//!
//! Every check runs on every call and all failures are collected, so the
//! form can show each message next to its field at once. Failures are
//! returned as data, never raised.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use thiserror::Error;

use crate::rule::core::{Frequency, RecurrenceRule};

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Interval,
    Date,
    SelectedDays,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Date => "date",
            Self::SelectedDays => "selectedDays",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-input problem with a recurrence rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Interval must be at least 1.")]
    InvalidInterval,

    #[error("Start date must be before or equal to end date.")]
    InvalidDateRange,

    #[error("Please select at least one weekday.")]
    MissingWeekdaySelection,
}

impl ValidationError {
    /// Returns the field this error is reported against.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::InvalidInterval => Field::Interval,
            Self::InvalidDateRange => Field::Date,
            Self::MissingWeekdaySelection => Field::SelectedDays,
        }
    }
}

/// ## Summary
/// Field-keyed validation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, ValidationError>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "emptiness is spelled is_valid for validation results"
)]
impl ValidationResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Records an error against its field, replacing any earlier one.
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.get(error.field()) == Some(error)
    }

    /// Returns the human-readable message for a field, if it has one.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Drops the error on a field.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut result = Self::new();
        for error in iter {
            result.insert(error);
        }
        result
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a Field, &'a ValidationError);
    type IntoIter = btree_map::Iter<'a, Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// ## Summary
/// Runs every check against the rule and collects the failures.
///
/// Dates are compared as calendar dates.
#[must_use]
pub fn validate(rule: &RecurrenceRule) -> ValidationResult {
    let mut result = ValidationResult::new();

    if rule.interval < 1 {
        result.insert(ValidationError::InvalidInterval);
    }

    if rule.start_date > rule.end_date {
        result.insert(ValidationError::InvalidDateRange);
    }

    if rule.frequency == Frequency::Weekly && rule.selected_weekdays.is_empty() {
        result.insert(ValidationError::MissingWeekdaySelection);
    }

    result
}
