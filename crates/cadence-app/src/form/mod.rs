//! ## Summary
//! Recurrence form session.
//!
//! Holds one immutable `RecurrenceRule` that each edit replaces, together
//! with the outcome of the last `generate`. Edits clear the messages of the
//! fields they touch; the preview only changes on `generate` or when the
//! frequency changes.

use cadence_rule::rule::core::{Frequency, RecurrenceRule, Weekday};
use cadence_rule::rule::expand::{PreviewDateList, RecurrenceExpander};
use cadence_rule::rule::validation::{Field, ValidationResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct RecurrenceForm {
    rule: RecurrenceRule,
    errors: ValidationResult,
    preview: PreviewDateList,
}

impl RecurrenceForm {
    /// Opens a form on an existing rule with no messages and no preview.
    #[must_use]
    pub fn new(rule: RecurrenceRule) -> Self {
        Self {
            rule,
            errors: ValidationResult::new(),
            preview: PreviewDateList::new(),
        }
    }

    #[must_use]
    pub fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewDateList {
        &self.preview
    }

    /// Switching frequency drops every message and the preview.
    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.replace_rule(|rule| rule.with_frequency(frequency));
        self.errors.clear_all();
        self.preview = PreviewDateList::new();
    }

    pub fn set_interval(&mut self, interval: i32) {
        self.replace_rule(|rule| rule.with_interval(interval));
        self.errors.clear(Field::Interval);
    }

    /// Applies raw interval input, read like a browser's `parseInt`: the
    /// leading integer is taken and the rest ignored, so `2.5` gives 2.
    /// Input with no leading integer is ignored.
    ///
    /// Returns whether the input was applied.
    pub fn set_interval_input(&mut self, input: &str) -> bool {
        if let Some(interval) = parse_leading_int(input) {
            self.set_interval(interval);
            true
        } else {
            tracing::trace!(input, "Ignoring non-numeric interval input");
            false
        }
    }

    pub fn toggle_weekday(&mut self, weekday: Weekday) {
        self.replace_rule(|rule| rule.toggle_weekday(weekday));
        self.errors.clear(Field::SelectedDays);
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.replace_rule(|rule| rule.with_start_date(start_date));
        self.errors.clear(Field::Date);
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.replace_rule(|rule| rule.with_end_date(end_date));
        self.errors.clear(Field::Date);
    }

    /// ## Summary
    /// Validates and expands the current rule.
    ///
    /// On failure the messages are stored and the preview is emptied. On
    /// success the messages are cleared and the preview replaced.
    ///
    /// ## Errors
    /// Returns the stored validation messages when the rule is invalid.
    #[tracing::instrument(skip(self), fields(rule = %self.rule.to_rrule()))]
    pub fn generate(&mut self) -> Result<&PreviewDateList, &ValidationResult> {
        match RecurrenceExpander::new(&self.rule).expand() {
            Ok(preview) => {
                self.errors.clear_all();
                self.preview = preview;
                tracing::debug!(count = self.preview.len(), "Preview generated");
                Ok(&self.preview)
            }
            Err(errors) => {
                self.errors = errors;
                self.preview = PreviewDateList::new();
                tracing::debug!(errors = self.errors.len(), "Preview rejected");
                Err(&self.errors)
            }
        }
    }

    /// The weekday picker is only offered for weekly rules.
    #[must_use]
    pub fn shows_weekday_picker(&self) -> bool {
        self.rule.frequency == Frequency::Weekly
    }

    /// Returns the interval field label, e.g. `Every 2 weeks`.
    #[must_use]
    pub fn interval_label(&self) -> String {
        let unit = self.rule.frequency.unit_label();
        if self.rule.interval == 1 {
            format!("Every {unit}")
        } else {
            format!("Every {} {unit}s", self.rule.interval)
        }
    }

    /// Weekday picker entries with their selection state, Sunday first.
    #[must_use]
    pub fn weekday_options(&self) -> Vec<(Weekday, bool)> {
        Weekday::all()
            .into_iter()
            .map(|day| (day, self.rule.includes(day)))
            .collect()
    }

    fn replace_rule(&mut self, edit: impl FnOnce(RecurrenceRule) -> RecurrenceRule) {
        let rule = std::mem::take(&mut self.rule);
        self.rule = edit(rule);
    }
}

/// Reads the leading integer of `input`: optional whitespace and sign, then
/// decimal digits, or hex digits after `0x`. Reading stops at the first other
/// character. Values outside `i32` saturate.
fn parse_leading_int(input: &str) -> Option<i32> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }
    if !seen_digit {
        return None;
    }

    let value = if negative { -value } else { value };
    Some(i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX }))
}
