//! Mock implementations of port traits
//!
//! In-memory implementations that can be scripted for testing. They record
//! calls so tests can verify behavior.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::StockStatus;
use crate::domain::ports::{Notifier, StateStore, StockProbe};
use crate::error::{NotifyError, ProbeError, StateError};

// ============================================================================
// Scripted Stock Probe
// ============================================================================

/// Probe returning a scripted sequence of outcomes.
///
/// `None` entries simulate a probe failure. It also tracks how many probes
/// run concurrently, so tests can assert checks are serialized.
pub struct ScriptedProbe {
    outcomes: Mutex<VecDeque<Option<StockStatus>>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new(outcomes: Vec<Option<StockStatus>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            delay: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn always(status: StockStatus) -> Self {
        Self::new(vec![Some(status)])
    }

    /// Make each probe take a while, to widen the race window
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Highest number of probes that were ever in flight at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockProbe for ScriptedProbe {
    async fn current_status(&self) -> Result<StockStatus, ProbeError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        // Repeat the last scripted outcome once the script runs out
        let outcome = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.len() > 1 {
                outcomes.pop_front().unwrap()
            } else {
                outcomes.front().copied().flatten()
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        outcome.ok_or(ProbeError::UpstreamStatus { status: 503 })
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Notifier that records every alert instead of sending it
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every notify attempt fail
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_back_in_stock(
        &self,
        product_name: &str,
        product_url: &str,
    ) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::NotConfigured("scripted failure".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((product_name.to_string(), product_url.to_string()));
        Ok(())
    }
}

// ============================================================================
// In-Memory State Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryStateStore {
    status: RwLock<Option<StockStatus>>,
    fail_saves: bool,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a saved status
    pub fn with_status(self, status: StockStatus) -> Self {
        *self.status.write().unwrap() = Some(status);
        self
    }

    /// Make every save attempt fail
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn current(&self) -> Option<StockStatus> {
        *self.status.read().unwrap()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self) -> Result<Option<StockStatus>, StateError> {
        Ok(*self.status.read().unwrap())
    }

    async fn save(&self, status: StockStatus) -> Result<(), StateError> {
        if self.fail_saves {
            return Err(StateError::Corrupt("scripted failure".to_string()));
        }
        *self.status.write().unwrap() = Some(status);
        Ok(())
    }
}
