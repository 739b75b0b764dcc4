//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod probe;
pub mod state;

pub use notifier::Notifier;
pub use probe::StockProbe;
pub use state::StateStore;
