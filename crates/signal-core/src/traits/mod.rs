//! Core traits for the signal engine.

mod data_source;
mod indicator;
mod strategy;

pub use data_source::MarketDataProvider;
pub use indicator::Indicator;
pub use strategy::{Strategy, StrategyConfig};
