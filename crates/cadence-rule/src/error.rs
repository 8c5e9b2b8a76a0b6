use thiserror::Error;

/// Errors raised while constructing recurrence rule values
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("Weekday index out of range (expected 0-6): {0}")]
    WeekdayOutOfRange(u8),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
