//! Core data types for the signal engine.

mod ohlcv;
mod recommendation;
mod strategy_kind;
mod timeframe;

pub use ohlcv::{Bar, MarketSnapshot};
pub use recommendation::{Action, Recommendation};
pub use strategy_kind::StrategyKind;
pub use timeframe::Timeframe;
