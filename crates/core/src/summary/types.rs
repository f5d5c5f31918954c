//! Summary data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reporting period of a scheduled summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Calendar week starting Sunday 00:00.
    Week,
    /// Calendar month starting on the 1st at 00:00.
    Month,
}

impl Period {
    /// Every period the scheduler runs.
    pub const ALL: [Self; 2] = [Self::Week, Self::Month];

    /// Wire name of the period.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown period name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown summary period: {0}")]
pub struct ParsePeriodError(pub String);

impl std::str::FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// Total and count of expenses since the start of a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Period the summary covers.
    pub period: Period,
    /// First instant included in the summary.
    pub period_start: DateTime<Utc>,
    /// Sum of amounts dated on or after `period_start`.
    pub total: Decimal,
    /// Number of expenses included.
    pub count: usize,
}
