//! In-memory, insertion-ordered expense ledger.

use spendlog_shared::types::ExpenseId;

use crate::expense::{Expense, NewExpense};

/// Ordered collection of every recorded expense.
///
/// Records are only ever appended; nothing is updated or removed. The store
/// has no internal locking, so a multi-threaded host must serialize access.
#[derive(Debug, Default)]
pub struct LedgerStore {
    expenses: Vec<Expense>,
}

impl LedgerStore {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a fresh identifier and appends the expense at the end.
    pub fn append(&mut self, expense: NewExpense) -> Expense {
        let expense = Expense {
            id: ExpenseId::new(),
            category: expense.category,
            amount: expense.amount,
            date: expense.date,
        };
        self.expenses.push(expense.clone());
        expense
    }

    /// Every stored expense in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of stored expenses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
