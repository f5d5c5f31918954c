//! Aggregation service.

use super::types::{CategorySpend, OrderedTotals, SpendingAnalytics};
use crate::calendar::ReferenceCalendar;
use crate::expense::Expense;

/// Service for computing spending analytics.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Runs every aggregation over `expenses`.
    #[must_use]
    pub fn analyze(expenses: &[Expense], calendar: &ReferenceCalendar) -> SpendingAnalytics {
        let category_totals = Self::category_totals(expenses);
        let highest_spending_category = Self::highest_spending(&category_totals);
        let monthly_totals = Self::monthly_totals(expenses, calendar);

        SpendingAnalytics {
            category_totals,
            highest_spending_category,
            monthly_totals,
        }
    }

    /// Sums amounts per category in first-encountered order.
    #[must_use]
    pub fn category_totals(expenses: &[Expense]) -> OrderedTotals {
        let mut totals = OrderedTotals::new();
        for expense in expenses {
            totals.add(&expense.category, expense.amount);
        }
        totals
    }

    /// Picks the category with the strictly greatest total.
    ///
    /// Totals are scanned in encounter order and a later category only takes
    /// the lead with a strictly greater total, so ties go to the earlier one.
    #[must_use]
    pub fn highest_spending(totals: &OrderedTotals) -> CategorySpend {
        let mut leader: Option<(&str, _)> = None;
        for (category, total) in totals.iter() {
            if leader.is_none_or(|(_, best)| total > best) {
                leader = Some((category, total));
            }
        }

        leader.map_or_else(CategorySpend::none, |(category, amount)| CategorySpend {
            category: category.to_string(),
            amount,
        })
    }

    /// Sums amounts per `"{month}-{year}"` key in first-encountered order.
    #[must_use]
    pub fn monthly_totals(expenses: &[Expense], calendar: &ReferenceCalendar) -> OrderedTotals {
        let mut totals = OrderedTotals::new();
        for expense in expenses {
            totals.add(&calendar.month_year_key(expense.date), expense.amount);
        }
        totals
    }
}
