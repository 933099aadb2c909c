//! Opening-range breakout strategy.
//!
//! Signals when price leaves the recent high/low range by more than a
//! fraction of the range width.

use serde::{Deserialize, Serialize};
use signal_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{MarketSnapshot, Recommendation, StrategyKind},
};
use signal_indicators::Channel;
use tracing::trace;

use crate::{check_confidence, check_period};

/// Configuration for the ORB strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    /// Samples that make up the range (24 hourly candles = one day)
    pub range_period: usize,
    /// Breakout distance as a fraction of the range width
    pub breakout_fraction: f64,
    /// Confidence for a breakout in either direction
    pub confidence: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            range_period: 24,
            breakout_fraction: 0.1,
            confidence: 0.7,
        }
    }
}

impl StrategyConfig for OrbConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        check_period("Range period", self.range_period)?;
        if !self.breakout_fraction.is_finite() || self.breakout_fraction < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Breakout fraction must be a non-negative number".into(),
            ));
        }
        check_confidence("Confidence", self.confidence)?;
        Ok(())
    }
}

/// Opening-range breakout strategy.
#[derive(Debug, Clone)]
pub struct OrbStrategy {
    config: OrbConfig,
}

impl OrbStrategy {
    /// Create a new ORB strategy.
    pub fn new(config: OrbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    /// Evaluate `current_price` against the range of the last
    /// `range_period` values of `range_prices`.
    pub fn evaluate_against(&self, range_prices: &[f64], current_price: f64) -> Recommendation {
        let Some(range) = Channel::over(range_prices, self.config.range_period) else {
            return Recommendation::hold("No ORB signal");
        };

        let threshold = range.range() * self.config.breakout_fraction;

        trace!(
            current_price,
            high = range.high,
            low = range.low,
            threshold,
            "orb range"
        );

        if current_price > range.high + threshold {
            Recommendation::buy(self.config.confidence, "ORB breakout (up)")
        } else if current_price < range.low - threshold {
            Recommendation::sell(self.config.confidence, "ORB breakdown (down)")
        } else {
            Recommendation::hold("No ORB signal")
        }
    }

    /// Evaluate a price/volume series, taking the last price as current.
    ///
    /// The session open is taken to be the current price and the range
    /// includes the current sample. Volumes are not read.
    pub fn evaluate_series(&self, prices: &[f64], _volumes: &[f64]) -> Recommendation {
        let Some(&current_price) = prices.last() else {
            return Recommendation::hold("No ORB signal");
        };
        let open_price = current_price;
        trace!(open_price, "orb session open");

        self.evaluate_against(prices, current_price)
    }
}

impl Default for OrbStrategy {
    fn default() -> Self {
        Self::new(OrbConfig::default())
    }
}

impl Strategy for OrbStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Orb
    }

    fn name(&self) -> &str {
        "Opening Range Breakout"
    }

    fn description(&self) -> &str {
        "Trades moves beyond the last 24-sample range by 10% of its width"
    }

    fn evaluate(&self, snapshot: &MarketSnapshot, _rsi: f64) -> Recommendation {
        self.evaluate_series(&snapshot.closes, &snapshot.volumes)
    }

    fn warmup_period(&self) -> usize {
        self.config.range_period
    }
}
