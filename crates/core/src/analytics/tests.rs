//! Tests for the analytics module.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spendlog_shared::types::ExpenseId;

use super::service::AnalyticsService;
use super::types::{CategorySpend, OrderedTotals};
use crate::calendar::ReferenceCalendar;
use crate::expense::Expense;

fn expense(category: &str, amount: Decimal, y: i32, m: u32, d: u32) -> Expense {
    Expense {
        id: ExpenseId::new(),
        category: category.to_string(),
        amount,
        date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
    }
}

fn collect(totals: &OrderedTotals) -> Vec<(String, Decimal)> {
    totals.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn test_reference_example() {
    let expenses = vec![
        expense("Food", dec!(50), 2024, 1, 10),
        expense("Food", dec!(30), 2024, 1, 20),
        expense("Travel", dec!(100), 2024, 2, 5),
    ];

    let analytics = AnalyticsService::analyze(&expenses, &ReferenceCalendar::utc());

    assert_eq!(
        collect(&analytics.category_totals),
        vec![("Food".to_string(), dec!(80)), ("Travel".to_string(), dec!(100))]
    );
    assert_eq!(
        analytics.highest_spending_category,
        CategorySpend {
            category: "Travel".to_string(),
            amount: dec!(100),
        }
    );
    assert_eq!(
        collect(&analytics.monthly_totals),
        vec![("1-2024".to_string(), dec!(80)), ("2-2024".to_string(), dec!(100))]
    );
}

#[test]
fn test_empty_input() {
    let analytics = AnalyticsService::analyze(&[], &ReferenceCalendar::utc());
    assert!(analytics.category_totals.is_empty());
    assert!(analytics.monthly_totals.is_empty());
    assert_eq!(analytics.highest_spending_category, CategorySpend::none());
    assert_eq!(analytics.highest_spending_category.category, "");
    assert_eq!(analytics.highest_spending_category.amount, Decimal::ZERO);
}

#[test]
fn test_tie_keeps_first_encountered() {
    let expenses = vec![
        expense("Health", dec!(20), 2024, 3, 1),
        expense("Food", dec!(50), 2024, 3, 2),
        expense("Health", dec!(30), 2024, 3, 3),
    ];
    let highest = AnalyticsService::highest_spending(&AnalyticsService::category_totals(&expenses));
    assert_eq!(highest.category, "Health");
    assert_eq!(highest.amount, dec!(50));

    let reversed = vec![
        expense("Food", dec!(50), 2024, 3, 2),
        expense("Health", dec!(50), 2024, 3, 3),
    ];
    let highest = AnalyticsService::highest_spending(&AnalyticsService::category_totals(&reversed));
    assert_eq!(highest.category, "Food");
}

#[test]
fn test_category_order_is_encounter_order() {
    let expenses = vec![
        expense("Utilities", dec!(1), 2024, 1, 1),
        expense("Education", dec!(2), 2024, 1, 2),
        expense("Food", dec!(3), 2024, 1, 3),
        expense("Education", dec!(4), 2024, 1, 4),
    ];
    let totals = AnalyticsService::category_totals(&expenses);
    let keys: Vec<&str> = totals.keys().collect();
    assert_eq!(keys, ["Utilities", "Education", "Food"]);
    assert_eq!(totals.get("Education"), Some(dec!(6)));
    assert_eq!(totals.get("Travel"), None);
}

#[test]
fn test_monthly_keys_follow_encounter_not_chronology() {
    let expenses = vec![
        expense("Food", dec!(5), 2024, 11, 3),
        expense("Food", dec!(7), 2023, 2, 9),
        expense("Food", dec!(1), 2024, 11, 20),
    ];
    let totals = AnalyticsService::monthly_totals(&expenses, &ReferenceCalendar::utc());
    assert_eq!(
        collect(&totals),
        vec![("11-2024".to_string(), dec!(6)), ("2-2023".to_string(), dec!(7))]
    );
}

#[test]
fn test_monthly_keys_use_reference_timezone() {
    // 2024-01-31 20:00 UTC is already February in Tokyo.
    let late = Expense {
        id: ExpenseId::new(),
        category: "Food".to_string(),
        amount: dec!(10),
        date: Utc.with_ymd_and_hms(2024, 1, 31, 20, 0, 0).unwrap(),
    };
    let totals = AnalyticsService::monthly_totals(
        &[late],
        &ReferenceCalendar::new(chrono_tz::Asia::Tokyo),
    );
    assert_eq!(totals.keys().collect::<Vec<_>>(), ["2-2024"]);
}

#[test]
fn test_analytics_serializes_in_encounter_order() {
    let expenses = vec![
        expense("Travel", dec!(100), 2024, 2, 5),
        expense("Food", dec!(50), 2024, 1, 10),
    ];
    let analytics = AnalyticsService::analyze(&expenses, &ReferenceCalendar::utc());
    let json = serde_json::to_string(&analytics).unwrap();
    assert_eq!(
        json,
        r#"{"categoryTotals":{"Travel":"100","Food":"50"},"highestSpendingCategory":{"category":"Travel","amount":"100"},"monthlyTotals":{"2-2024":"100","1-2024":"50"}}"#
    );
}

#[test]
fn test_totals_saturate_instead_of_overflowing() {
    let huge = dec!(50000000000000000000000000000);
    let expenses = vec![
        expense("Food", huge, 2024, 1, 10),
        expense("Food", huge, 2024, 1, 11),
        expense("Travel", huge, 2024, 2, 1),
    ];

    let analytics = AnalyticsService::analyze(&expenses, &ReferenceCalendar::utc());

    assert_eq!(analytics.category_totals.get("Food"), Some(Decimal::MAX));
    assert_eq!(analytics.monthly_totals.get("1-2024"), Some(Decimal::MAX));
    assert_eq!(analytics.highest_spending_category.category, "Food");
    assert_eq!(analytics.category_totals.grand_total(), Decimal::MAX);
}

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate categories.
fn category() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Food"),
        Just("Travel"),
        Just("Entertainment"),
        Just("Utilities"),
    ]
}

fn expenses_strategy() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec((category(), positive_amount(), 1u32..=12), 0..50).prop_map(|rows| {
        rows.into_iter()
            .map(|(c, amount, month)| expense(c, amount, 2024, month, 1))
            .collect()
    })
}

proptest! {
    /// Category totals and monthly totals both partition the grand total.
    #[test]
    fn test_totals_sum_to_grand_total(expenses in expenses_strategy()) {
        let grand: Decimal = expenses.iter().map(|e| e.amount).sum();
        let analytics = AnalyticsService::analyze(&expenses, &ReferenceCalendar::utc());

        prop_assert_eq!(analytics.category_totals.grand_total(), grand);
        prop_assert_eq!(analytics.monthly_totals.grand_total(), grand);
    }

    /// The highest category is at least every total and strictly above
    /// every earlier-encountered total.
    #[test]
    fn test_highest_dominates(expenses in expenses_strategy()) {
        let totals = AnalyticsService::category_totals(&expenses);
        let highest = AnalyticsService::highest_spending(&totals);

        if totals.is_empty() {
            prop_assert_eq!(highest, CategorySpend::none());
        } else {
            let mut seen_leader = false;
            for (category, total) in totals.iter() {
                prop_assert!(highest.amount >= total);
                if category == highest.category {
                    seen_leader = true;
                } else if !seen_leader {
                    prop_assert!(highest.amount > total);
                }
            }
            prop_assert!(seen_leader);
        }
    }

    /// Keys appear in the order their first record appears.
    #[test]
    fn test_category_keys_in_first_seen_order(expenses in expenses_strategy()) {
        let mut expected: Vec<&str> = Vec::new();
        for e in &expenses {
            if !expected.contains(&e.category.as_str()) {
                expected.push(e.category.as_str());
            }
        }
        let totals = AnalyticsService::category_totals(&expenses);
        let actual: Vec<&str> = totals.keys().collect();
        prop_assert_eq!(actual, expected);
    }
}
