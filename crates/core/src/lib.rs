//! Core ledger and analytics logic for Spendlog.
//!
//! This crate contains pure business logic with ZERO web or runtime
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `category` - Registry of allowed expense categories
//! - `calendar` - Date parsing and period boundaries in one reference timezone
//! - `expense` - Expense records and validation
//! - `store` - Append-only ledger and filtering
//! - `analytics` - Category, highest-spending, and monthly aggregation
//! - `summary` - Periodic summaries and their clock and sink ports
//! - `service` - Caller-facing ledger operations

pub mod analytics;
pub mod calendar;
pub mod category;
pub mod expense;
pub mod service;
pub mod store;
pub mod summary;

pub use analytics::{CategorySpend, OrderedTotals, SpendingAnalytics};
pub use calendar::ReferenceCalendar;
pub use category::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use service::ExpenseService;
pub use store::{ExpenseQuery, FilterError};
pub use summary::{Clock, Period, PeriodSummary, SummarySink, SystemClock, TracingSink};
