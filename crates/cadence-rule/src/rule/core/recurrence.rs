//! Recurrence rule value.

use std::collections::BTreeSet;

use cadence_core::config::RuleConfig;
use cadence_core::constants::{DEFAULT_END_DATE, DEFAULT_INTERVAL, DEFAULT_START_DATE};
use chrono::NaiveDate;

use super::{Frequency, Weekday};
use crate::error::{RuleError, RuleResult};

/// A recurrence rule over a bounded date window.
///
/// The rule is an immutable value: every edit goes through a `with_*`
/// method that consumes the rule and returns the updated one.
///
/// `interval` holds whatever the user entered, including values below 1;
/// validation reports those. It is never applied as a step during
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: i32,
    pub selected_weekdays: BTreeSet<Weekday>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RecurrenceRule {
    /// Creates a rule with interval 1 and no selected weekdays.
    #[must_use]
    pub fn new(frequency: Frequency, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            frequency,
            interval: 1,
            selected_weekdays: BTreeSet::new(),
            start_date,
            end_date,
        }
    }

    /// Creates a weekly rule.
    #[must_use]
    pub fn weekly(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::new(Frequency::Weekly, start_date, end_date)
    }

    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    /// Replaces the selected weekdays.
    #[must_use]
    pub fn with_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.selected_weekdays = weekdays.into_iter().collect();
        self
    }

    /// Adds the weekday if absent, removes it if present.
    #[must_use]
    pub fn toggle_weekday(mut self, weekday: Weekday) -> Self {
        if !self.selected_weekdays.remove(&weekday) {
            self.selected_weekdays.insert(weekday);
        }
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Whether the weekday is part of the selection.
    #[must_use]
    pub fn includes(&self, weekday: Weekday) -> bool {
        self.selected_weekdays.contains(&weekday)
    }
}

impl Default for RecurrenceRule {
    /// The state a freshly opened form starts in.
    fn default() -> Self {
        Self::weekly(DEFAULT_START_DATE, DEFAULT_END_DATE).with_interval(DEFAULT_INTERVAL)
    }
}

impl TryFrom<&RuleConfig> for RecurrenceRule {
    type Error = RuleError;

    /// ## Summary
    /// Builds a rule from its configuration form.
    ///
    /// ## Errors
    /// Returns an error if the frequency name is unknown or a weekday index
    /// is outside `0..=6`.
    fn try_from(config: &RuleConfig) -> RuleResult<Self> {
        let frequency = config.frequency.parse::<Frequency>()?;
        let selected_weekdays = config
            .weekdays
            .iter()
            .map(|&index| Weekday::from_index(index).ok_or(RuleError::WeekdayOutOfRange(index)))
            .collect::<RuleResult<BTreeSet<_>>>()?;

        Ok(Self {
            frequency,
            interval: config.interval,
            selected_weekdays,
            start_date: config.start_date,
            end_date: config.end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn config(frequency: &str, weekdays: Vec<u8>) -> RuleConfig {
        RuleConfig {
            frequency: frequency.to_string(),
            interval: 2,
            weekdays,
            start_date: date(2025, 7, 1),
            end_date: date(2025, 7, 31),
        }
    }

    #[test]
    fn test_default_is_initial_form_state() {
        let rule = RecurrenceRule::default();

        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.interval, 1);
        assert!(rule.selected_weekdays.is_empty());
        assert_eq!(rule.start_date, date(2025, 7, 19));
        assert_eq!(rule.end_date, date(2025, 8, 19));
    }

    #[test]
    fn test_toggle_weekday_adds_then_removes() {
        let rule = RecurrenceRule::default().toggle_weekday(Weekday::Monday);
        assert!(rule.includes(Weekday::Monday));

        let rule = rule.toggle_weekday(Weekday::Monday);
        assert!(!rule.includes(Weekday::Monday));
    }

    #[test]
    fn test_with_weekdays_deduplicates() {
        let rule = RecurrenceRule::default().with_weekdays([
            Weekday::Friday,
            Weekday::Monday,
            Weekday::Friday,
        ]);

        let days: Vec<_> = rule.selected_weekdays.iter().copied().collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    }

    #[test]
    fn test_edits_leave_original_untouched() {
        let original = RecurrenceRule::default();
        let edited = original.clone().with_interval(4);

        assert_eq!(original.interval, 1);
        assert_eq!(edited.interval, 4);
    }

    #[test]
    fn test_try_from_config() {
        let rule = RecurrenceRule::try_from(&config("Weekly", vec![6, 0, 6]))
            .expect("config should convert");

        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.interval, 2);
        assert_eq!(
            rule.selected_weekdays.iter().copied().collect::<Vec<_>>(),
            vec![Weekday::Sunday, Weekday::Saturday]
        );
    }

    #[test]
    fn test_try_from_config_rejects_bad_weekday() {
        let err = RecurrenceRule::try_from(&config("weekly", vec![1, 7])).unwrap_err();
        assert!(matches!(err, RuleError::WeekdayOutOfRange(7)));
    }

    #[test]
    fn test_try_from_config_rejects_unknown_frequency() {
        let err = RecurrenceRule::try_from(&config("fortnightly", vec![])).unwrap_err();
        assert!(matches!(err, RuleError::UnknownFrequency(_)));
    }
}
