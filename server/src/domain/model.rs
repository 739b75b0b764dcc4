//! Domain models for stock checking
//!
//! `StockStatus` is the two-state fact the checker tracks; its `Display` and
//! `FromStr` tokens are the exact strings written to the state file.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseStatusError;

/// Purchasability of the watched product for the configured pincode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in-stock"),
            StockStatus::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

impl FromStr for StockStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(StockStatus::InStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// What a single check observed
///
/// `Unknown` means the probe failed; the persisted status is left untouched
/// in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Observation {
    InStock,
    OutOfStock,
    Unknown,
}

impl From<StockStatus> for Observation {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => Observation::InStock,
            StockStatus::OutOfStock => Observation::OutOfStock,
        }
    }
}

/// Outcome of one check, returned by `GET /check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Status observed by this check, `unknown` if the probe failed
    pub status: Observation,
    /// Last persisted status before this check (out-of-stock if never saved)
    pub previous: StockStatus,
    /// Whether a restock notification was sent by this check
    pub notified: bool,
    pub checked_at: DateTime<Utc>,
}
