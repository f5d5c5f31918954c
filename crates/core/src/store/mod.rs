//! Append-only expense storage and filtered views over it.

pub mod filter;
pub mod ledger;

pub use filter::{DateRange, ExpenseFilter, ExpenseQuery, FilterError};
pub use ledger::LedgerStore;
