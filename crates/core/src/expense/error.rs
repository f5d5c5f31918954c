//! Expense validation errors.

use thiserror::Error;

/// Reasons a candidate expense is rejected.
///
/// Any single failure rejects the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    /// Category is missing or blank.
    #[error("Category is required")]
    MissingCategory,

    /// Category is not in the registry.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Amount is missing.
    #[error("Amount is required")]
    MissingAmount,

    /// Amount is not a number.
    #[error("Amount is not a valid number: {0:?}")]
    InvalidAmount(String),

    /// Amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount exceeds `MAX_AMOUNT`.
    #[error("Amount must not exceed {}", crate::expense::MAX_AMOUNT)]
    AmountTooLarge,

    /// Date is missing.
    #[error("Date is required")]
    MissingDate,

    /// Date cannot be parsed.
    #[error("Date is not valid: {0:?}")]
    InvalidDate(String),
}

impl From<ExpenseValidationError> for spendlog_shared::AppError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
