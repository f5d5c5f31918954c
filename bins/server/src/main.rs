//! Spendlog API Server
//!
//! Main entry point for the Spendlog expense ledger service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use spendlog_api::{AppState, create_router};
use spendlog_core::{
    CategoryRegistry, DEFAULT_CATEGORIES, ExpenseService, ReferenceCalendar, SystemClock,
    TracingSink,
};
use spendlog_scheduler::SummaryScheduler;
use spendlog_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let fmt_layer = if config.logging.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendlog=debug,tower_http=debug".into()),
        )
        .with(fmt_layer)
        .init();

    // Build the ledger
    let registry = match &config.ledger.categories {
        Some(names) => CategoryRegistry::new(names),
        None => CategoryRegistry::new(DEFAULT_CATEGORIES),
    };
    let calendar = ReferenceCalendar::new(config.ledger.timezone);
    info!(
        categories = ?registry.names(),
        timezone = %config.ledger.timezone,
        "Ledger configured"
    );
    let state = AppState::new(ExpenseService::new(registry, calendar));

    // Start summary jobs
    let _scheduler = config.scheduler.enabled.then(|| {
        SummaryScheduler::new(
            Arc::clone(&state.ledger),
            Arc::new(SystemClock),
            Arc::new(TracingSink),
        )
        .spawn()
    });

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
