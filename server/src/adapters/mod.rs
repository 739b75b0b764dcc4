//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod fs;
pub mod http;
pub mod smtp;

pub use fs::FileStateStore;
pub use http::HttpStockProbe;
pub use smtp::SmtpNotifier;
