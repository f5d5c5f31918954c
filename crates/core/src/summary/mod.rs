//! Periodic spending summaries.
//!
//! The summary job totals every expense dated on or after the start of the
//! current week (Sunday 00:00) or month (1st 00:00). Invocation timing is
//! owned by an external scheduler; this module only computes and reports.

pub mod ports;
pub mod service;
pub mod types;


pub use ports::{Clock, FixedClock, SummarySink, SystemClock, TracingSink};
pub use service::SummaryService;
pub use types::{ParsePeriodError, Period, PeriodSummary};
