//! HTTP handlers
//!
//! Axum request handlers for the service endpoints.

pub mod check;

pub use check::{last_status, root, run_check};
