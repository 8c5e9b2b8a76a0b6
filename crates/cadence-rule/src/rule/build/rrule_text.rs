//! RFC 5545 `RRULE` text for a recurrence rule.

use crate::rule::core::{Frequency, RecurrenceRule};

impl RecurrenceRule {
    /// ## Summary
    /// Renders the rule as an RFC 5545 recurrence rule value.
    ///
    /// The end date becomes a date-form `UNTIL`; `BYDAY` is only written for
    /// weekly rules. This is a rendering of the rule, not of its expansion:
    /// `INTERVAL` is written as entered.
    #[must_use]
    pub fn to_rrule(&self) -> String {
        let mut parts = vec![format!("FREQ={}", self.frequency.as_rfc_str())];

        if self.interval != 1 {
            parts.push(format!("INTERVAL={}", self.interval));
        }

        parts.push(format!("UNTIL={}", self.end_date.format("%Y%m%d")));

        if self.frequency == Frequency::Weekly && !self.selected_weekdays.is_empty() {
            let days: Vec<_> = self.selected_weekdays.iter().map(|d| d.as_str()).collect();
            parts.push(format!("BYDAY={}", days.join(",")));
        }

        parts.join(";")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::rule::core::{Frequency, RecurrenceRule, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_weekly_rrule() {
        let rule = RecurrenceRule::weekly(date(2025, 7, 19), date(2025, 8, 19))
            .with_weekdays([Weekday::Saturday, Weekday::Sunday]);
        assert_eq!(rule.to_rrule(), "FREQ=WEEKLY;UNTIL=20250819;BYDAY=SU,SA");
    }

    #[test]
    fn test_interval_written_when_not_one() {
        let rule = RecurrenceRule::weekly(date(2025, 7, 19), date(2025, 8, 19))
            .with_interval(2)
            .with_weekdays([Weekday::Monday]);
        assert_eq!(rule.to_rrule(), "FREQ=WEEKLY;INTERVAL=2;UNTIL=20250819;BYDAY=MO");
    }

    #[test]
    fn test_byday_only_for_weekly() {
        let rule = RecurrenceRule::new(Frequency::Monthly, date(2025, 1, 1), date(2025, 12, 31))
            .with_weekdays([Weekday::Monday]);
        assert_eq!(rule.to_rrule(), "FREQ=MONTHLY;UNTIL=20251231");
    }
}
