//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `model`: Domain models for stock observations
//! - `ports`: Trait definitions for external dependencies

pub mod model;
pub mod ports;
