//! Weekly and monthly summary jobs.
//!
//! One tokio task per period sleeps until the next calendar trigger
//! (Sunday 00:00 for weeks, the 1st at 00:00 for months), computes the
//! period summary against the shared ledger, and hands it to a sink.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use spendlog_core::{Clock, ExpenseService, Period, PeriodSummary, SummarySink};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Ledger shared between request handlers and the scheduler.
pub type SharedLedger = Arc<Mutex<ExpenseService>>;

/// Runs period summaries on their calendar triggers.
pub struct SummaryScheduler {
    ledger: SharedLedger,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn SummarySink>,
}

impl SummaryScheduler {
    /// Creates a scheduler over `ledger`.
    pub fn new(ledger: SharedLedger, clock: Arc<dyn Clock>, sink: Arc<dyn SummarySink>) -> Self {
        Self {
            ledger,
            clock,
            sink,
        }
    }

    /// Computes and emits the summary for `period` as of the clock's now.
    pub async fn run_once(&self, period: Period) -> PeriodSummary {
        self.run_at(period, self.clock.now()).await
    }

    async fn run_at(&self, period: Period, now: DateTime<Utc>) -> PeriodSummary {
        let summary = self.ledger.lock().await.scheduled_summary(period, now);
        self.sink.emit(&summary);
        summary
    }

    /// Starts one background task per period.
    pub fn spawn(self) -> SchedulerHandle {
        let scheduler = Arc::new(self);
        let tasks = Period::ALL
            .into_iter()
            .map(|period| tokio::spawn(Arc::clone(&scheduler).run_period(period)))
            .collect();
        info!("Summary scheduler started");
        SchedulerHandle { tasks }
    }

    async fn run_period(self: Arc<Self>, period: Period) {
        let mut last_fired: Option<DateTime<Utc>> = None;
        loop {
            // A wall clock lagging the timer must not re-arm a trigger that already fired.
            let now = self.clock.now();
            let from = last_fired.map_or(now, |fired| now.max(fired));
            let calendar = *self.ledger.lock().await.calendar();
            let Some(next) = calendar.next_trigger(period, from) else {
                warn!(period = %period, "No further trigger instant; stopping job");
                return;
            };

            debug!(period = %period, next_run = %next.to_rfc3339(), "Summary job scheduled");
            tokio::time::sleep((next - now).to_std().unwrap_or_default()).await;

            // Timers may fire a hair early; never summarize before the trigger.
            let fired_at = self.clock.now().max(next);
            self.run_at(period, fired_at).await;
            last_fired = Some(next);
        }
    }
}

/// Handle to the running summary tasks.
pub struct SchedulerHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stops every summary task.
    pub fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        info!("Summary scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use spendlog_core::ExpenseDraft;
    use spendlog_core::summary::FixedClock;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Wall clock running 1% slower than the runtime timer.
    struct SlowClock {
        base: DateTime<Utc>,
        started: Instant,
    }

    impl Clock for SlowClock {
        fn now(&self) -> DateTime<Utc> {
            let elapsed = self.started.elapsed() * 99 / 100;
            self.base + chrono::TimeDelta::from_std(elapsed).unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        summaries: std::sync::Mutex<Vec<PeriodSummary>>,
    }

    impl RecordingSink {
        fn recorded(&self) -> Vec<PeriodSummary> {
            self.summaries.lock().unwrap().clone()
        }
    }

    impl SummarySink for RecordingSink {
        fn emit(&self, summary: &PeriodSummary) {
            self.summaries.lock().unwrap().push(summary.clone());
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn ledger_with(drafts: &[(&str, &str, &str)]) -> SharedLedger {
        let mut service = ExpenseService::default();
        for (category, amount, date) in drafts {
            service
                .create_expense(&ExpenseDraft::new(*category, *amount, *date))
                .unwrap();
        }
        Arc::new(Mutex::new(service))
    }

    #[tokio::test]
    async fn test_run_once_on_empty_ledger() {
        let sink = Arc::new(RecordingSink::default());
        let scheduler = SummaryScheduler::new(
            ledger_with(&[]),
            Arc::new(FixedClock(at(2024, 1, 17, 9, 0))),
            sink.clone(),
        );

        let summary = scheduler.run_once(Period::Week).await;

        assert_eq!(summary.period, Period::Week);
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.count, 0);
        assert_eq!(sink.recorded(), vec![summary]);
    }

    #[tokio::test]
    async fn test_run_once_month() {
        let sink = Arc::new(RecordingSink::default());
        let scheduler = SummaryScheduler::new(
            ledger_with(&[
                ("Food", "50", "2024-01-31"),
                ("Food", "20", "2024-02-01"),
                ("Travel", "5.5", "2024-02-03T10:00:00Z"),
            ]),
            Arc::new(FixedClock(at(2024, 2, 4, 0, 0))),
            sink.clone(),
        );

        let summary = scheduler.run_once(Period::Month).await;

        assert_eq!(summary.total, dec!(25.5));
        assert_eq!(summary.count, 2);
        assert_eq!(sink.recorded().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_job_fires_at_week_start() {
        let sink = Arc::new(RecordingSink::default());
        // Saturday 23:59, one minute before the weekly trigger.
        let scheduler = SummaryScheduler::new(
            ledger_with(&[("Food", "10", "2024-01-21")]),
            Arc::new(FixedClock(at(2024, 1, 20, 23, 59))),
            sink.clone(),
        );

        let handle = scheduler.spawn();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(sink.recorded().is_empty());

        tokio::time::sleep(Duration::from_secs(31)).await;
        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].period, Period::Week);
        assert_eq!(recorded[0].period_start, at(2024, 1, 21, 0, 0));
        assert_eq!(recorded[0].total, dec!(10));
        assert_eq!(recorded[0].count, 1);

        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_lagging_wall_clock_fires_each_trigger_once() {
        let sink = Arc::new(RecordingSink::default());
        let clock = SlowClock {
            base: at(2024, 1, 20, 23, 59),
            started: Instant::now(),
        };
        let scheduler = SummaryScheduler::new(
            ledger_with(&[("Food", "10", "2024-01-21")]),
            Arc::new(clock),
            sink.clone(),
        );

        let handle = scheduler.spawn();
        tokio::time::sleep(Duration::from_secs(120)).await;

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].period, Period::Week);
        assert_eq!(recorded[0].period_start, at(2024, 1, 21, 0, 0));

        handle.shutdown();
    }
}
