//! Check handlers
//!
//! Endpoints for running a stock check and reading the last observed status.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::model::{CheckReport, StockStatus};
use crate::error::AppError;
use crate::AppState;

/// GET /
///
/// Usage hint for anyone poking the service root.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "OK. Use /check to run the stock checker, /health for liveness."
    }))
}

/// GET /check
///
/// Run one stock check. The service degrades internally (probe, notify and
/// save failures are reported in the body, not as HTTP errors), so this
/// always answers 200 for a completed check.
pub async fn run_check(State(state): State<AppState>) -> Json<CheckReport> {
    Json(state.checker.run_check().await)
}

/// Last persisted status, `null` if no check has saved one yet
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: Option<StockStatus>,
}

/// GET /status
///
/// Read the last persisted status without probing the shop.
pub async fn last_status(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let status = state.checker.last_status().await?;
    Ok(Json(StatusResponse { status }))
}
