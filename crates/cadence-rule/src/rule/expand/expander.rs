//! Recurrence expansion algorithm.
//!
//! Walks the rule's date window one day at a time and keeps the days that
//! match the rule.

use chrono::{Datelike, NaiveDate};

use super::PreviewDateList;
use crate::rule::core::{Frequency, RecurrenceRule, Weekday};
use crate::rule::validation::{ValidationResult, validate};

/// ## Summary
/// Expands a recurrence rule into preview dates.
///
/// The rule is validated first; expansion only runs for a valid rule.
pub struct RecurrenceExpander<'a> {
    rule: &'a RecurrenceRule,
}

impl<'a> RecurrenceExpander<'a> {
    /// Creates a new recurrence expander.
    #[must_use]
    pub fn new(rule: &'a RecurrenceRule) -> Self {
        Self { rule }
    }

    /// ## Summary
    /// Validates the rule and enumerates its dates, ascending.
    ///
    /// ## Errors
    /// Returns every validation failure if the rule is invalid. No dates are
    /// produced in that case.
    ///
    /// ## Side Effects
    /// None - the result depends only on the rule.
    #[tracing::instrument(skip(self), fields(
        frequency = %self.rule.frequency,
        start = %self.rule.start_date,
        end = %self.rule.end_date,
    ))]
    pub fn expand(&self) -> Result<PreviewDateList, ValidationResult> {
        let errors = validate(self.rule);
        if !errors.is_valid() {
            tracing::debug!(errors = errors.len(), "Rule failed validation");
            return Err(errors);
        }

        let dates = match self.rule.frequency {
            Frequency::Weekly => self.expand_weekly(),
            // Not implemented: these frequencies validate but produce no dates.
            // Keep in step with `Frequency::is_expandable`.
            Frequency::Daily | Frequency::Monthly | Frequency::Yearly => {
                tracing::debug!(
                    frequency = %self.rule.frequency,
                    "Expansion not implemented for frequency"
                );
                PreviewDateList::new()
            }
        };

        tracing::debug!(count = dates.len(), "Rule expanded");
        Ok(dates)
    }

    /// Keeps every day in the window whose weekday is selected.
    ///
    /// `interval` is not applied here.
    fn expand_weekly(&self) -> PreviewDateList {
        self.days()
            .filter(|day| self.rule.includes(Weekday::from_chrono(day.weekday())))
            .collect()
    }

    /// Every day from `start_date` to `end_date`, inclusive.
    ///
    /// `NaiveDate::iter_days` stops one short of `NaiveDate::MAX`, so the walk
    /// is built on `succ_opt` instead.
    fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.rule.end_date;
        std::iter::successors(Some(self.rule.start_date), NaiveDate::succ_opt)
            .take_while(move |day| *day <= end)
    }
}

/// ## Summary
/// Validates and expands a recurrence rule.
///
/// ## Errors
/// Returns the collected validation failures if the rule is invalid.
pub fn expand(rule: &RecurrenceRule) -> Result<PreviewDateList, ValidationResult> {
    RecurrenceExpander::new(rule).expand()
}
