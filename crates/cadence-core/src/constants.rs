use chrono::NaiveDate;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cadence.toml";

/// Prefix for environment overrides, e.g. `CADENCE_RULE__INTERVAL=2`
pub const ENV_PREFIX: &str = "CADENCE";
pub const ENV_NESTING_SEPARATOR: &str = "__";

pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Initial state of a freshly opened recurrence form.
pub const DEFAULT_FREQUENCY: &str = "weekly";
pub const DEFAULT_INTERVAL: i32 = 1;
pub const DEFAULT_START_DATE: NaiveDate = date(2025, 7, 19);
pub const DEFAULT_END_DATE: NaiveDate = date(2025, 8, 19);

/// Builds a date constant; an invalid date fails compilation.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid default date"),
    }
}
