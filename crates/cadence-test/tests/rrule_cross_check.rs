//! Cross-checks weekly expansion against the `rrule` crate.
//!
//! With interval 1, a weekly rule over `[start, end]` selects the same days
//! as `FREQ=WEEKLY;BYDAY=...;UNTIL=end` starting at `start`.

use cadence_rule::rule::core::{RecurrenceRule, Weekday};
use cadence_rule::rule::expand::expand;
use cadence_test::date;
use chrono::NaiveDate;

fn rrule_dates(rule: &RecurrenceRule) -> anyhow::Result<Vec<NaiveDate>> {
    let byday: Vec<_> = rule.selected_weekdays.iter().map(|d| d.as_str()).collect();
    let text = format!(
        "DTSTART:{}T000000Z\nRRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}T000000Z",
        rule.start_date.format("%Y%m%d"),
        byday.join(","),
        rule.end_date.format("%Y%m%d"),
    );

    let set = text.parse::<rrule::RRuleSet>()?;
    let result = set.all(u16::MAX);

    Ok(result.dates.iter().map(chrono::DateTime::date_naive).collect())
}

#[test_log::test]
fn weekly_matches_rrule_crate() {
    // Each start date falls on one of the selected weekdays.
    let cases = [
        (date(2025, 7, 19), date(2025, 8, 19), vec![Weekday::Saturday]),
        (
            date(2025, 7, 21),
            date(2025, 12, 31),
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        ),
        (
            date(2024, 2, 25),
            date(2025, 3, 1),
            vec![Weekday::Sunday, Weekday::Thursday],
        ),
        (date(2026, 1, 1), date(2026, 1, 1), Weekday::all().to_vec()),
    ];

    for (start, end, weekdays) in cases {
        let rule = RecurrenceRule::weekly(start, end).with_weekdays(weekdays);

        let ours = expand(&rule).expect("rule is valid").into_dates();
        let theirs = rrule_dates(&rule).expect("rrule should expand");

        tracing::debug!(rrule = %rule.to_rrule(), count = ours.len(), "Compared expansion");
        assert_eq!(ours, theirs, "rule {}", rule.to_rrule());
    }
}
