//! Expanded preview dates.

use std::fmt;
use std::slice;

use chrono::NaiveDate;

use crate::rule::build::format_long_date;

/// ## Summary
/// Ascending list of dates produced by one expansion.
///
/// A list is always produced whole by the expander and replaced whole by
/// the caller; it is never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewDateList {
    dates: Vec<NaiveDate>,
}

impl PreviewDateList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[must_use]
    pub fn into_dates(self) -> Vec<NaiveDate> {
        self.dates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    /// Returns every date in long form, e.g. `July 19th, 2025`.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        self.dates.iter().copied().map(format_long_date).collect()
    }
}

impl FromIterator<NaiveDate> for PreviewDateList {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PreviewDateList {
    type Item = &'a NaiveDate;
    type IntoIter = slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

impl fmt::Display for PreviewDateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for date in &self.dates {
            writeln!(f, "{}", format_long_date(*date))?;
        }
        Ok(())
    }
}
