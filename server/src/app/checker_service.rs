//! Checker service
//!
//! Orchestrates one stock check: probe the product page, compare against the
//! last persisted status, notify on the out-of-stock to in-stock transition,
//! persist the new status.
//!
//! Checks are serialized: the service holds an async mutex for the whole
//! check so two overlapping `/check` requests cannot interleave the
//! read-notify-save sequence.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::model::{CheckReport, Observation, StockStatus};
use crate::domain::ports::{Notifier, StateStore, StockProbe};
use crate::error::AppError;

pub struct CheckerService<P, N, S>
where
    P: StockProbe,
    N: Notifier,
    S: StateStore,
{
    probe: Arc<P>,
    notifier: Arc<N>,
    state: Arc<S>,
    product_name: String,
    product_url: String,
    check_lock: Mutex<()>,
}

impl<P, N, S> CheckerService<P, N, S>
where
    P: StockProbe,
    N: Notifier,
    S: StateStore,
{
    pub fn new(
        probe: Arc<P>,
        notifier: Arc<N>,
        state: Arc<S>,
        product_name: String,
        product_url: String,
    ) -> Self {
        Self {
            probe,
            notifier,
            state,
            product_name,
            product_url,
            check_lock: Mutex::new(()),
        }
    }

    /// Run one check and report what it observed.
    ///
    /// Degrades instead of failing: a probe error reports `unknown` and
    /// leaves the persisted status untouched; notify and save errors are
    /// logged and the check still reports.
    pub async fn run_check(&self) -> CheckReport {
        let _serialized = self.check_lock.lock().await;

        let previous = match self.state.load().await {
            Ok(Some(status)) => status,
            Ok(None) => StockStatus::OutOfStock,
            Err(e) => {
                tracing::warn!("failed to load saved status, assuming out-of-stock: {}", e);
                StockStatus::OutOfStock
            }
        };

        let observed = match self.probe.current_status().await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("probe failed, leaving saved status untouched: {}", e);
                return CheckReport {
                    status: Observation::Unknown,
                    previous,
                    notified: false,
                    checked_at: Utc::now(),
                };
            }
        };

        tracing::info!(%previous, current = %observed, "check complete");

        let mut notified = false;
        if previous == StockStatus::OutOfStock && observed == StockStatus::InStock {
            tracing::info!("product is back in stock, sending notification");
            match self
                .notifier
                .notify_back_in_stock(&self.product_name, &self.product_url)
                .await
            {
                Ok(()) => notified = true,
                Err(e) => tracing::warn!("restock notification failed: {}", e),
            }
        }

        if let Err(e) = self.state.save(observed).await {
            tracing::warn!("failed to persist stock status: {}", e);
        }

        CheckReport {
            status: observed.into(),
            previous,
            notified,
            checked_at: Utc::now(),
        }
    }

    /// Last persisted status, without probing.
    pub async fn last_status(&self) -> Result<Option<StockStatus>, AppError> {
        Ok(self.state.load().await?)
    }
}
