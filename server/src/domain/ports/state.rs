//! State store port trait
//!
//! Persists the last observed stock status between checks so the service can
//! notify exactly on the out-of-stock to in-stock transition.

use async_trait::async_trait;

use crate::domain::model::StockStatus;
use crate::error::StateError;

#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the last persisted status, `None` if nothing was saved yet.
    async fn load(&self) -> Result<Option<StockStatus>, StateError>;

    /// Persist the status observed by the current check.
    async fn save(&self, status: StockStatus) -> Result<(), StateError>;
}
