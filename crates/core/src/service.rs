//! Expense service: the ledger's caller-facing operations.
//!
//! Owns the category registry, the reference calendar, and the ledger store.
//! Hosts that share one service across threads must wrap it in a single
//! mutex; every operation here runs to completion without suspending.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::analytics::{AnalyticsService, SpendingAnalytics};
use crate::calendar::ReferenceCalendar;
use crate::category::CategoryRegistry;
use crate::expense::{Expense, ExpenseDraft, ExpenseValidationError, validate_expense};
use crate::store::{ExpenseQuery, FilterError, LedgerStore};
use crate::summary::{Period, PeriodSummary, SummaryService};

/// Ledger operations over a single in-memory store.
#[derive(Debug, Default)]
pub struct ExpenseService {
    registry: CategoryRegistry,
    calendar: ReferenceCalendar,
    store: LedgerStore,
}

impl ExpenseService {
    /// Creates a service with an empty ledger.
    #[must_use]
    pub fn new(registry: CategoryRegistry, calendar: ReferenceCalendar) -> Self {
        Self {
            registry,
            calendar,
            store: LedgerStore::new(),
        }
    }

    /// The category registry.
    #[must_use]
    pub const fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The reference calendar.
    #[must_use]
    pub const fn calendar(&self) -> &ReferenceCalendar {
        &self.calendar
    }

    /// Every stored expense in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        self.store.all()
    }

    /// Validates and records an expense.
    ///
    /// # Errors
    ///
    /// Returns the first validation rule the draft violates; nothing is
    /// stored in that case.
    pub fn create_expense(
        &mut self,
        draft: &ExpenseDraft,
    ) -> Result<Expense, ExpenseValidationError> {
        let new_expense = validate_expense(draft, &self.registry, &self.calendar)
            .inspect_err(|e| warn!(error = %e, "Rejected expense"))?;

        let expense = self.store.append(new_expense);
        info!(
            expense_id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            date = %expense.date.to_rfc3339(),
            "Expense recorded"
        );
        Ok(expense)
    }

    /// Lists stored expenses matching `query`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDateRange` if both range bounds are
    /// supplied and either fails to parse.
    pub fn list_expenses(&self, query: &ExpenseQuery) -> Result<Vec<Expense>, FilterError> {
        let filter = query.resolve(&self.registry, &self.calendar)?;
        let expenses = filter.apply(self.store.all());
        debug!(
            matched = expenses.len(),
            total = self.store.len(),
            "Listed expenses"
        );
        Ok(expenses)
    }

    /// Computes analytics over `expenses`.
    #[must_use]
    pub fn analyze(&self, expenses: &[Expense]) -> SpendingAnalytics {
        AnalyticsService::analyze(expenses, &self.calendar)
    }

    /// Totals the ledger since the start of `period` as seen from `now`.
    #[must_use]
    pub fn scheduled_summary(&self, period: Period, now: DateTime<Utc>) -> PeriodSummary {
        SummaryService::summarize(self.store.all(), period, now, &self.calendar)
    }
}
