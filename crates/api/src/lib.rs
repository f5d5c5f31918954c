//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for recording, listing, and analyzing expenses
//! - Translation of core errors into JSON error responses
//! - Response types with numeric amounts

pub mod error;
pub mod routes;

use axum::Router;
use spendlog_core::ExpenseService;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger, shared with the summary scheduler.
    pub ledger: Arc<Mutex<ExpenseService>>,
}

impl AppState {
    /// Wraps `service` for sharing across handlers.
    pub fn new(service: ExpenseService) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(service)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
