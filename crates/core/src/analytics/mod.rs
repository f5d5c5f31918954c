//! Spending analytics over expense sequences.
//!
//! This module provides pure aggregation over any ordered slice of expenses,
//! whether the whole ledger or a filtered subset:
//! - Category totals
//! - Highest-spending category
//! - Monthly totals keyed `"{month}-{year}"`
//!
//! Output maps keep keys in first-encountered order.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::AnalyticsService;
pub use types::{CategorySpend, OrderedTotals, SpendingAnalytics};
