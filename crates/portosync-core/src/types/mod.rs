//! Enumerated domain types shared across portosync-* crates

pub mod frequency;
pub mod market;

pub use frequency::RebalancingFrequency;
pub use market::StockMarket;
