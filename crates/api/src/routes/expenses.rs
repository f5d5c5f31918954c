//! Expense recording, listing, and analytics routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use spendlog_core::{
    CategorySpend, Expense, ExpenseDraft, ExpenseQuery, OrderedTotals, SpendingAnalytics,
};
use spendlog_shared::{AppError, types::ExpenseId};
use std::str::FromStr;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/analytics", get(expense_analytics))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording an expense.
///
/// Fields are taken as raw JSON so that numbers and strings both reach
/// validation; `null` counts as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    /// Category name.
    pub category: Option<Value>,
    /// Amount as a number or numeric string.
    pub amount: Option<Value>,
    /// Date string.
    pub date: Option<Value>,
}

impl From<CreateExpenseRequest> for ExpenseDraft {
    fn from(req: CreateExpenseRequest) -> Self {
        Self {
            category: field_text(req.category),
            amount: field_text(req.amount),
            date: field_text(req.date),
        }
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A decimal amount rendered as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonAmount(pub Decimal);

impl Serialize for JsonAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match serde_json::Number::from_str(&self.0.normalize().to_string()) {
            Ok(number) => number.serialize(serializer),
            Err(_) => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

/// Response for a recorded expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: ExpenseId,
    /// Category name.
    pub category: String,
    /// Amount spent.
    pub amount: JsonAmount,
    /// RFC 3339 timestamp.
    pub date: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            category: expense.category,
            amount: JsonAmount(expense.amount),
            date: expense.date.to_rfc3339(),
        }
    }
}

/// Ordered totals rendered as a JSON object of numbers.
#[derive(Debug)]
pub struct TotalsResponse(pub OrderedTotals);

impl Serialize for TotalsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, amount) in self.0.iter() {
            map.serialize_entry(key, &JsonAmount(amount))?;
        }
        map.end()
    }
}

/// Response for the highest-spending category.
#[derive(Debug, Serialize)]
pub struct CategorySpendResponse {
    /// Category name, empty when nothing was spent.
    pub category: String,
    /// Category total.
    pub amount: JsonAmount,
}

impl From<CategorySpend> for CategorySpendResponse {
    fn from(spend: CategorySpend) -> Self {
        Self {
            category: spend.category,
            amount: JsonAmount(spend.amount),
        }
    }
}

/// Response for spending analytics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Totals per category in encounter order.
    pub category_totals: TotalsResponse,
    /// Category with the strictly greatest total.
    pub highest_spending_category: CategorySpendResponse,
    /// Totals per `"{month}-{year}"` key in encounter order.
    pub monthly_totals: TotalsResponse,
}

impl From<SpendingAnalytics> for AnalyticsResponse {
    fn from(analytics: SpendingAnalytics) -> Self {
        Self {
            category_totals: TotalsResponse(analytics.category_totals),
            highest_spending_category: analytics.highest_spending_category.into(),
            monthly_totals: TotalsResponse(analytics.monthly_totals),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/expenses` - Record a new expense.
async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::Validation(format!("Malformed request body: {}", rejection.body_text()))
    })?;

    let draft = ExpenseDraft::from(payload);
    let expense = state.ledger.lock().await.create_expense(&draft)?;

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// GET `/expenses` - List expenses by category and date range.
async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpenseQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let expenses = state.ledger.lock().await.list_expenses(&query)?;

    let items: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

/// GET `/expenses/analytics` - Aggregate the expenses a listing would return.
async fn expense_analytics(
    State(state): State<AppState>,
    Query(query): Query<ExpenseQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let analytics = {
        let ledger = state.ledger.lock().await;
        let expenses = ledger.list_expenses(&query)?;
        ledger.analyze(&expenses)
    };

    info!(
        categories = analytics.category_totals.len(),
        months = analytics.monthly_totals.len(),
        "Computed spending analytics"
    );
    Ok(Json(AnalyticsResponse::from(analytics)))
}
