//! Analytics data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Running totals keyed by label, kept in first-encountered order.
///
/// Backed by a key vector plus an index map so iteration order never
/// depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedTotals {
    entries: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl OrderedTotals {
    /// Creates an empty set of totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `key`, appending the key if it is new.
    ///
    /// Totals saturate at `Decimal::MAX` instead of overflowing.
    pub fn add(&mut self, key: &str, amount: Decimal) {
        if let Some(&position) = self.index.get(key) {
            let total = &mut self.entries[position].1;
            *total = total.saturating_add(amount);
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), amount));
        }
    }

    /// Total recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    /// Keys and totals in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(key, total)| (key.as_str(), *total))
    }

    /// Keys in first-encountered order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every total, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |sum, (_, total)| sum.saturating_add(*total))
    }
}

impl Serialize for OrderedTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, total) in &self.entries {
            map.serialize_entry(key, total)?;
        }
        map.end()
    }
}

/// A category and the amount spent in it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategorySpend {
    /// Category name; empty when there were no expenses.
    pub category: String,
    /// Total spent.
    pub amount: Decimal,
}

impl CategorySpend {
    /// Placeholder reported for an empty expense set.
    #[must_use]
    pub fn none() -> Self {
        Self {
            category: String::new(),
            amount: Decimal::ZERO,
        }
    }
}

/// Combined analytics for a set of expenses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAnalytics {
    /// Totals per category.
    pub category_totals: OrderedTotals,
    /// Category with the strictly greatest total.
    pub highest_spending_category: CategorySpend,
    /// Totals per `"{month}-{year}"` key.
    pub monthly_totals: OrderedTotals,
}
