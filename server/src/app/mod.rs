//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain models, ports, and external systems.

pub mod checker_service;

pub use checker_service::CheckerService;
