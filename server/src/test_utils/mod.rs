//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written rather than generated: the port traits are small
//! and the tests want to script outcomes and observe calls explicitly.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
