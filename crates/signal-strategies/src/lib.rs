//! Strategy evaluators.
//!
//! This crate provides the three built-in decision functions:
//! - Turtle channel breakout
//! - Scalping momentum (RSI, moving averages and volume surges)
//! - Opening-range breakout
//!
//! Each evaluator is stateless and independent of the others.

mod orb;
mod registry;
mod scalping;
mod turtle;

pub use orb::{OrbConfig, OrbStrategy};
pub use registry::{StrategyInfo, StrategyRegistry, StrategySet};
pub use scalping::{ScalpingConfig, ScalpingStrategy};
pub use turtle::{TurtleConfig, TurtleStrategy};

use signal_core::error::StrategyError;

pub(crate) fn check_period(name: &str, period: usize) -> Result<(), StrategyError> {
    if period == 0 {
        return Err(StrategyError::InvalidConfig(format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(())
}

pub(crate) fn check_confidence(name: &str, confidence: f64) -> Result<(), StrategyError> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(StrategyError::InvalidConfig(format!(
            "{} must be between 0 and 1",
            name
        )));
    }
    Ok(())
}
