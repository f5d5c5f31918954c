//! Business rule validation for new expenses.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ExpenseValidationError;
use super::types::{ExpenseDraft, NewExpense};
use crate::calendar::ReferenceCalendar;
use crate::category::CategoryRegistry;

/// Largest amount a single expense may carry (10^15).
///
/// Keeps running totals far from the `Decimal` range limit.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Validates a draft against the category, amount, and date rules.
///
/// Rules are checked in that order and the first failure is returned:
/// 1. Category is present, non-empty, and registered
/// 2. Amount is present, numeric, greater than zero, and at most `MAX_AMOUNT`
/// 3. Date is present and parses to a real calendar date
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate_expense(
    draft: &ExpenseDraft,
    registry: &CategoryRegistry,
    calendar: &ReferenceCalendar,
) -> Result<NewExpense, ExpenseValidationError> {
    let category = match draft.category.as_deref() {
        None | Some("") => return Err(ExpenseValidationError::MissingCategory),
        Some(c) if !registry.contains(c) => {
            return Err(ExpenseValidationError::UnknownCategory(c.to_string()));
        }
        Some(c) => c.to_string(),
    };

    let amount = match draft.amount.as_deref() {
        None => return Err(ExpenseValidationError::MissingAmount),
        Some(raw) => parse_amount(raw)?,
    };

    let date = match draft.date.as_deref() {
        None => return Err(ExpenseValidationError::MissingDate),
        Some(raw) => calendar
            .parse(raw)
            .ok_or_else(|| ExpenseValidationError::InvalidDate(raw.to_string()))?,
    };

    Ok(NewExpense {
        category,
        amount,
        date,
    })
}

/// Coerces textual input into a positive amount.
///
/// Surrounding whitespace is ignored. Plain decimal and scientific notation
/// are accepted; anything else (including `NaN` and infinities) is not a
/// number.
///
/// # Errors
///
/// Returns `InvalidAmount` for non-numeric text, `NonPositiveAmount` for
/// zero or negative values, and `AmountTooLarge` above `MAX_AMOUNT`.
pub fn parse_amount(raw: &str) -> Result<Decimal, ExpenseValidationError> {
    let text = raw.trim();
    let invalid = || ExpenseValidationError::InvalidAmount(raw.to_string());

    // Decimal::from_str tolerates digit separators; numeric input does not.
    if text.is_empty() || text.contains('_') {
        return Err(invalid());
    }

    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| invalid())?;

    if amount <= Decimal::ZERO {
        return Err(ExpenseValidationError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(ExpenseValidationError::AmountTooLarge);
    }

    Ok(amount)
}
