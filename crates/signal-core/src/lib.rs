//! Core types and traits for the signal engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, MarketSnapshot, Timeframe)
//! - Recommendations and strategy selectors
//! - Core traits for indicators, strategies and market data providers

pub mod types;
pub mod traits;
pub mod error;

pub use error::{SignalError, SignalResult};
pub use types::*;
pub use traits::*;
