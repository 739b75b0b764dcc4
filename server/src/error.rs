//! Unified error types for the shelfwatch server
//!
//! This module defines error types for each layer:
//! - `ProbeError`: product page probe errors
//! - `NotifyError`: restock notification errors
//! - `StateError`: persisted-status store errors
//! - `AppError`: application layer errors (what handlers turn into HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stock probe errors
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Product page returned HTTP {status}")]
    UpstreamStatus { status: u16 },
}

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notifications not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Persisted-status store errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("State file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State file is corrupt: {0}")]
    Corrupt(String),
}

/// Error parsing a stock status token
#[derive(Debug, Error)]
#[error("unrecognized stock status '{0}'")]
pub struct ParseStatusError(pub String);

/// Application layer errors - used by HTTP handlers
///
/// Probe and notify failures never surface here: a check degrades and
/// reports them in its body instead of failing the request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::State(e) => {
                tracing::error!("State error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "State store error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
