//! Collaborators the summary job depends on: a wall clock and a sink.

use chrono::{DateTime, Utc};
use tracing::info;

use super::types::PeriodSummary;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Receives computed summaries for reporting.
pub trait SummarySink: Send + Sync {
    /// Publishes one summary.
    fn emit(&self, summary: &PeriodSummary);
}

/// Sink that reports summaries as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SummarySink for TracingSink {
    fn emit(&self, summary: &PeriodSummary) {
        info!(
            target: "spendlog::summary",
            period = %summary.period,
            period_start = %summary.period_start.to_rfc3339(),
            total = %summary.total,
            count = summary.count,
            "Period summary computed"
        );
    }
}
