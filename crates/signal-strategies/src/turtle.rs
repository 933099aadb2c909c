//! Turtle breakout strategy.
//!
//! Buys when price clears the N-period high and sells when it falls
//! through the N-period low, using a short (20) and a major (55) channel.

use serde::{Deserialize, Serialize};
use signal_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{MarketSnapshot, Recommendation, StrategyKind},
};
use signal_indicators::Channel;
use tracing::trace;

use crate::{check_confidence, check_period};

/// Configuration for the Turtle strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Short channel lookback
    pub entry_period: usize,
    /// Major channel lookback
    pub major_period: usize,
    /// Confidence for short-channel breaks
    pub entry_confidence: f64,
    /// Confidence for major-channel breaks
    pub major_confidence: f64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            entry_period: 20,
            major_period: 55,
            entry_confidence: 0.7,
            major_confidence: 0.8,
        }
    }
}

impl StrategyConfig for TurtleConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        check_period("Entry period", self.entry_period)?;
        check_period("Major period", self.major_period)?;
        check_confidence("Entry confidence", self.entry_confidence)?;
        check_confidence("Major confidence", self.major_confidence)?;
        Ok(())
    }
}

/// Turtle breakout strategy.
#[derive(Debug, Clone)]
pub struct TurtleStrategy {
    config: TurtleConfig,
}

impl TurtleStrategy {
    /// Create a new Turtle strategy.
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Evaluate `current_price` against the channels built from `prices`.
    ///
    /// The short channel is checked before the major one. Because the
    /// major channel always contains the short one, the major branches
    /// only fire when the periods are configured the other way round.
    pub fn evaluate_prices(&self, prices: &[f64], current_price: f64) -> Recommendation {
        let entry_period = self.config.entry_period;
        let major_period = self.config.major_period;

        let (Some(entry), Some(major)) = (
            Channel::over(prices, entry_period),
            Channel::over(prices, major_period),
        ) else {
            return Recommendation::hold("No turtle signal");
        };

        trace!(
            current_price,
            entry_high = entry.high,
            entry_low = entry.low,
            major_high = major.high,
            major_low = major.low,
            "turtle channels"
        );

        if current_price > entry.high {
            Recommendation::buy(
                self.config.entry_confidence,
                format!("Turtle breakout ({}-period high)", entry_period),
            )
        } else if current_price < entry.low {
            Recommendation::sell(
                self.config.entry_confidence,
                format!("Turtle breakdown ({}-period low)", entry_period),
            )
        } else if current_price > major.high {
            Recommendation::buy(
                self.config.major_confidence,
                format!("Turtle major breakout ({}-period high)", major_period),
            )
        } else if current_price < major.low {
            Recommendation::sell(
                self.config.major_confidence,
                format!("Turtle major breakdown ({}-period low)", major_period),
            )
        } else {
            Recommendation::hold("No turtle signal")
        }
    }
}

impl Default for TurtleStrategy {
    fn default() -> Self {
        Self::new(TurtleConfig::default())
    }
}

impl Strategy for TurtleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Turtle
    }

    fn name(&self) -> &str {
        "Turtle Breakout"
    }

    fn description(&self) -> &str {
        "Trades breaks of the 20- and 55-period price channels"
    }

    fn evaluate(&self, snapshot: &MarketSnapshot, _rsi: f64) -> Recommendation {
        match snapshot.last_close() {
            Some(current) => self.evaluate_prices(&snapshot.closes, current),
            None => Recommendation::hold("No turtle signal"),
        }
    }

    fn warmup_period(&self) -> usize {
        self.config.entry_period.max(self.config.major_period)
    }
}
