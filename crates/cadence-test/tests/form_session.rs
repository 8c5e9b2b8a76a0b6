//! Form session flows driven from configuration.

use cadence_app::form::RecurrenceForm;
use cadence_core::config::RuleConfig;
use cadence_rule::error::RuleError;
use cadence_rule::rule::core::{Frequency, RecurrenceRule, Weekday};
use cadence_rule::rule::validation::Field;
use cadence_test::date;

fn rule_config(weekdays: Vec<u8>) -> RuleConfig {
    RuleConfig {
        frequency: "weekly".to_string(),
        interval: 1,
        weekdays,
        start_date: date(2025, 7, 19),
        end_date: date(2025, 8, 19),
    }
}

#[test_log::test]
fn configured_rule_generates_preview() {
    let rule = RecurrenceRule::try_from(&rule_config(vec![6])).expect("config should convert");
    let mut form = RecurrenceForm::new(rule);

    let preview = form.generate().expect("rule is valid");

    assert_eq!(preview.len(), 5);
    assert_eq!(preview.to_string().lines().next(), Some("July 19th, 2025"));
    assert_eq!(preview.to_string().lines().last(), Some("August 16th, 2025"));
}

#[test]
fn configured_weekday_out_of_range() {
    let err = RecurrenceRule::try_from(&rule_config(vec![9])).unwrap_err();
    assert!(matches!(err, RuleError::WeekdayOutOfRange(9)));
}

#[test]
fn user_fixes_every_error_then_generates() {
    let mut form = RecurrenceForm::default();
    form.set_interval(0);
    form.set_end_date(date(2025, 7, 1));

    let errors = form.generate().unwrap_err();
    assert_eq!(errors.len(), 3);

    form.set_interval_input("2");
    form.set_end_date(date(2025, 8, 19));
    form.toggle_weekday(Weekday::Sunday);
    assert!(form.errors().is_valid());

    let preview = form.generate().expect("rule is valid");
    assert_eq!(
        preview.dates(),
        &[
            date(2025, 7, 20),
            date(2025, 7, 27),
            date(2025, 8, 3),
            date(2025, 8, 10),
            date(2025, 8, 17),
        ]
    );
}

#[test]
fn switching_away_from_weekly_hides_weekday_error() {
    let mut form = RecurrenceForm::default();
    assert!(form.generate().is_err());
    assert!(form.errors().get(Field::SelectedDays).is_some());

    form.set_frequency(Frequency::Monthly);
    assert!(form.errors().is_valid());

    let preview = form.generate().expect("monthly needs no weekdays");
    assert!(preview.is_empty());
}
