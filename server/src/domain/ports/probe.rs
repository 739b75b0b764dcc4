//! Stock probe port trait
//!
//! Defines the interface for observing the current stock status of the
//! watched product.

use async_trait::async_trait;

use crate::domain::model::StockStatus;
use crate::error::ProbeError;

#[async_trait]
pub trait StockProbe: Send + Sync {
    /// Observe the current purchasability of the product.
    ///
    /// Transport and upstream failures are errors; a readable page always
    /// classifies to a status (out-of-stock when no positive signal is found).
    async fn current_status(&self) -> Result<StockStatus, ProbeError>;
}
