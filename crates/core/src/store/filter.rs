//! Category and date-range filtering over expense sequences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calendar::ReferenceCalendar;
use crate::category::CategoryRegistry;
use crate::expense::Expense;

/// Errors raised while resolving a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// At least one bound of the date range is not a valid date.
    #[error("Invalid date range: start {start:?}, end {end:?}")]
    InvalidDateRange {
        /// Start bound as supplied.
        start: String,
        /// End bound as supplied.
        end: String,
    },
}

impl From<FilterError> for spendlog_shared::AppError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::InvalidDateRange { start, end } => {
                Self::InvalidDateRange(format!("start {start:?}, end {end:?}"))
            }
        }
    }
}

/// Listing query as supplied by a client. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQuery {
    /// Category to keep.
    pub category: Option<String>,
    /// Inclusive lower bound; only used together with `end_date`.
    pub start_date: Option<String>,
    /// Inclusive upper bound; only used together with `start_date`.
    pub end_date: Option<String>,
}

impl ExpenseQuery {
    /// Creates a query that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to a category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts the query to an inclusive date range.
    #[must_use]
    pub fn with_date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Resolves the raw query into a filter.
    ///
    /// A category that is not registered is ignored rather than matching
    /// nothing. The date range applies only when both bounds are present.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDateRange` if either bound is present
    /// alongside the other but fails to parse.
    pub fn resolve(
        &self,
        registry: &CategoryRegistry,
        calendar: &ReferenceCalendar,
    ) -> Result<ExpenseFilter, FilterError> {
        let category = match non_empty(self.category.as_ref()) {
            Some(c) if registry.contains(c) => Some(c.to_string()),
            Some(c) => {
                debug!(category = %c, "Ignoring unregistered category filter");
                None
            }
            None => None,
        };

        let date_range = match (
            non_empty(self.start_date.as_ref()),
            non_empty(self.end_date.as_ref()),
        ) {
            (Some(start), Some(end)) => match (calendar.parse(start), calendar.parse(end)) {
                (Some(start), Some(end)) => Some(DateRange { start, end }),
                _ => {
                    return Err(FilterError::InvalidDateRange {
                        start: start.to_string(),
                        end: end.to_string(),
                    });
                }
            },
            _ => None,
        };

        Ok(ExpenseFilter {
            category,
            date_range,
        })
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Inclusive range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First instant included.
    pub start: DateTime<Utc>,
    /// Last instant included.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Returns true if `instant` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Resolved filter. Both criteria must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Exact category to keep.
    pub category: Option<String>,
    /// Inclusive date range to keep.
    pub date_range: Option<DateRange>,
}

impl ExpenseFilter {
    /// Returns true if the filter keeps everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date_range.is_none()
    }

    /// Returns true if `expense` passes every active criterion.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| expense.category == category)
            && self
                .date_range
                .is_none_or(|range| range.contains(expense.date))
    }

    /// Keeps matching expenses, preserving their relative order.
    #[must_use]
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}
