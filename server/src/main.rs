//! shelfwatch server
//!
//! Watches a shop product page and alerts by email when the product comes
//! back in stock for the configured delivery pincode. An external scheduler
//! drives it by hitting `GET /check`; the last observed status is persisted
//! between checks so the alert fires exactly on the restock transition.
//!
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{FileStateStore, HttpStockProbe, SmtpNotifier};
use app::CheckerService;
use config::Config;

/// Concrete checker wired with the production adapters
pub type Checker = CheckerService<HttpStockProbe, SmtpNotifier, FileStateStore>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with its middleware stack.
///
/// The timeout layer is the only cancellation mechanism: a request that does
/// not finish within the cutoff is answered 408 and its handler dropped.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(health))
        .route("/check", get(handlers::run_check))
        .route("/status", get(handlers::last_status))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the listening port from `PORT`, falling back to 8080.
fn resolve_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(8080)
}

// Single worker, single thread: requests are served one at a time, so the
// runtime stays on the current thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shelfwatch_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shelfwatch server...");

    // Load configuration
    let config = Config::from_env();
    if !config.alerts_enabled() {
        tracing::warn!("restock alerts disabled (SMTP sender/recipient not fully configured)");
    }

    // Create adapters
    let probe = Arc::new(HttpStockProbe::new(
        config.product_url.clone(),
        config.pincode.clone(),
    ));
    let notifier =
        Arc::new(SmtpNotifier::from_settings(&config.smtp).context("invalid SMTP configuration")?);
    let state_store = Arc::new(FileStateStore::new(config.state_file.clone()));

    // Create application service
    let checker = Arc::new(CheckerService::new(
        probe,
        notifier,
        state_store,
        config.product_name.clone(),
        config.product_url.clone(),
    ));

    let state = AppState { checker };
    let app = build_router(state, Duration::from_secs(config.request_timeout_secs));

    // Start server
    let port = resolve_port(std::env::var("PORT").ok());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
