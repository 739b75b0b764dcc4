pub mod probe;

pub use probe::HttpStockProbe;
