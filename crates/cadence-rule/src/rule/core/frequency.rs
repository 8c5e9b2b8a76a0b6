//! Recurrence frequency offered by the form.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;

/// How often a rule repeats.
///
/// Only [`Frequency::Weekly`] has expansion semantics. The other arms are
/// accepted and validated but expand to no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the lowercase name used in configuration and form values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns the RFC 5545 `FREQ` value.
    #[must_use]
    pub const fn as_rfc_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Returns the singular unit the interval counts in.
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }

    /// Whether expansion produces dates for this frequency.
    #[must_use]
    pub const fn is_expandable(self) -> bool {
        matches!(self, Self::Weekly)
    }

    /// Returns all frequencies in form order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }
}

impl FromStr for Frequency {
    type Err = RuleError;

    /// Parses a frequency name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => return Err(RuleError::UnknownFrequency(s.to_string())),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
