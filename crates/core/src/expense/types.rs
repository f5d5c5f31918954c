//! Expense domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendlog_shared::types::ExpenseId;

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier assigned by the ledger.
    pub id: ExpenseId,
    /// Registered category at the time of recording.
    pub category: String,
    /// Amount spent, always greater than zero.
    pub amount: Decimal,
    /// When the expense happened.
    pub date: DateTime<Utc>,
}

/// Unvalidated expense input as received from a client.
///
/// Every field may be absent. The amount is kept as raw text so numeric
/// coercion happens in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpenseDraft {
    /// Requested category.
    pub category: Option<String>,
    /// Amount in textual form.
    pub amount: Option<String>,
    /// Date string.
    pub date: Option<String>,
}

impl ExpenseDraft {
    /// Creates a draft with every field present.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            amount: Some(amount.into()),
            date: Some(date.into()),
        }
    }
}

/// A validated expense waiting for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Registered category.
    pub category: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Normalized instant.
    pub date: DateTime<Utc>,
}
