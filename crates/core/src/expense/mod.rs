//! Expense records and the validation that gates them into the ledger.

pub mod error;
pub mod types;
pub mod validation;

pub use error::ExpenseValidationError;
pub use types::{Expense, ExpenseDraft, NewExpense};
pub use validation::{MAX_AMOUNT, parse_amount, validate_expense};
