//! Summary computation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::types::{Period, PeriodSummary};
use crate::calendar::ReferenceCalendar;
use crate::expense::Expense;

/// Service for computing period summaries.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes `expenses` dated on or after the start of `period` as seen
    /// from `now`. There is no upper bound: anything dated after `now` counts.
    /// The total saturates at `Decimal::MAX`.
    #[must_use]
    pub fn summarize(
        expenses: &[Expense],
        period: Period,
        now: DateTime<Utc>,
        calendar: &ReferenceCalendar,
    ) -> PeriodSummary {
        let period_start = calendar.period_start(period, now);

        let (total, count) = expenses
            .iter()
            .filter(|e| e.date >= period_start)
            .fold((Decimal::ZERO, 0usize), |(total, count), e| {
                (total.saturating_add(e.amount), count + 1)
            });

        PeriodSummary {
            period,
            period_start,
            total,
            count,
        }
    }
}
