//! Scalping momentum strategy.
//!
//! Looks for strong moves confirmed by a volume surge: extreme RSI
//! readings against the slow average first, then fast/slow average trend
//! with a milder RSI and volume filter.

use serde::{Deserialize, Serialize};
use signal_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::{MarketSnapshot, Recommendation, StrategyKind},
};
use signal_indicators::sma;
use tracing::trace;

use crate::{check_confidence, check_period};

/// Configuration for the Scalping strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalpingConfig {
    /// Fast SMA period
    pub fast_period: usize,
    /// Middle SMA period (reported only)
    pub mid_period: usize,
    /// Slow SMA period
    pub slow_period: usize,
    /// Lookback for the average volume
    pub volume_period: usize,
    /// RSI below this is deeply oversold
    pub oversold: f64,
    /// RSI above this is deeply overbought
    pub overbought: f64,
    /// Minimum RSI for a trend buy
    pub bullish_rsi: f64,
    /// Maximum RSI for a trend sell
    pub bearish_rsi: f64,
    /// Volume multiple required by the extreme-RSI rules
    pub surge_volume_multiplier: f64,
    /// Volume multiple required by the trend rules
    pub trend_volume_multiplier: f64,
    /// Confidence for the extreme-RSI rules
    pub extreme_confidence: f64,
    /// Confidence for the trend rules
    pub trend_confidence: f64,
}

impl Default for ScalpingConfig {
    fn default() -> Self {
        Self {
            fast_period: 5,
            mid_period: 10,
            slow_period: 20,
            volume_period: 10,
            oversold: 25.0,
            overbought: 75.0,
            bullish_rsi: 55.0,
            bearish_rsi: 45.0,
            surge_volume_multiplier: 2.0,
            trend_volume_multiplier: 1.8,
            extreme_confidence: 0.8,
            trend_confidence: 0.75,
        }
    }
}

impl StrategyConfig for ScalpingConfig {
    fn validate(&self) -> Result<(), StrategyError> {
        check_period("Fast period", self.fast_period)?;
        check_period("Mid period", self.mid_period)?;
        check_period("Slow period", self.slow_period)?;
        check_period("Volume period", self.volume_period)?;

        for (name, level) in [
            ("Oversold", self.oversold),
            ("Overbought", self.overbought),
            ("Bullish RSI", self.bullish_rsi),
            ("Bearish RSI", self.bearish_rsi),
        ] {
            if !(0.0..=100.0).contains(&level) {
                return Err(StrategyError::InvalidConfig(format!(
                    "{} level must be between 0 and 100",
                    name
                )));
            }
        }
        if self.oversold >= self.overbought {
            return Err(StrategyError::InvalidConfig(
                "Oversold must be less than overbought".into(),
            ));
        }
        if self.surge_volume_multiplier < 0.0 || self.trend_volume_multiplier < 0.0 {
            return Err(StrategyError::InvalidConfig(
                "Volume multipliers must not be negative".into(),
            ));
        }

        check_confidence("Extreme confidence", self.extreme_confidence)?;
        check_confidence("Trend confidence", self.trend_confidence)?;
        Ok(())
    }
}

/// Scalping momentum strategy.
#[derive(Debug, Clone)]
pub struct ScalpingStrategy {
    config: ScalpingConfig,
}

impl ScalpingStrategy {
    /// Create a new Scalping strategy.
    pub fn new(config: ScalpingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScalpingConfig {
        &self.config
    }

    /// Evaluate prices and volumes given a precomputed RSI.
    ///
    /// Moving averages follow the SMA convention of reading `0.0` when the
    /// series is shorter than the period; the rules compare against that
    /// value as is.
    pub fn evaluate_series(&self, prices: &[f64], rsi: f64, volumes: &[f64]) -> Recommendation {
        let (Some(&current_price), Some(&current_volume)) = (prices.last(), volumes.last()) else {
            return Recommendation::hold("No scalping signal");
        };

        let cfg = &self.config;
        let sma_fast = sma(prices, cfg.fast_period);
        let sma_mid = sma(prices, cfg.mid_period);
        let sma_slow = sma(prices, cfg.slow_period);
        let avg_volume = sma(volumes, cfg.volume_period);

        trace!(
            current_price,
            rsi,
            sma_fast,
            sma_mid,
            sma_slow,
            avg_volume,
            current_volume,
            "scalping inputs"
        );

        let volume_surge = current_volume > avg_volume * cfg.surge_volume_multiplier;
        let volume_trend = current_volume > avg_volume * cfg.trend_volume_multiplier;

        if rsi < cfg.oversold && current_price > sma_slow && volume_surge {
            Recommendation::buy(cfg.extreme_confidence, "Deeply oversold with strong volume")
        } else if rsi > cfg.overbought && current_price < sma_slow && volume_surge {
            Recommendation::sell(cfg.extreme_confidence, "Deeply overbought with strong volume")
        } else if sma_fast > sma_slow && rsi > cfg.bullish_rsi && volume_trend {
            Recommendation::buy(cfg.trend_confidence, "Strong uptrend")
        } else if sma_fast < sma_slow && rsi < cfg.bearish_rsi && volume_trend {
            Recommendation::sell(cfg.trend_confidence, "Strong downtrend")
        } else {
            Recommendation::hold("No scalping signal")
        }
    }
}

impl Default for ScalpingStrategy {
    fn default() -> Self {
        Self::new(ScalpingConfig::default())
    }
}

impl Strategy for ScalpingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Scalping
    }

    fn name(&self) -> &str {
        "Scalping Momentum"
    }

    fn description(&self) -> &str {
        "Trades RSI extremes and short-term trends confirmed by volume surges"
    }

    fn evaluate(&self, snapshot: &MarketSnapshot, rsi: f64) -> Recommendation {
        self.evaluate_series(&snapshot.closes, rsi, &snapshot.volumes)
    }

    fn warmup_period(&self) -> usize {
        self.config
            .slow_period
            .max(self.config.fast_period)
            .max(self.config.mid_period)
            .max(self.config.volume_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_core::types::Action;

    /// 15 bars at 100, 4 bars at `dip`, then `last`.
    fn prices(dip: f64, last: f64) -> Vec<f64> {
        let mut p = vec![100.0; 15];
        p.extend([dip; 4]);
        p.push(last);
        p
    }

    /// 19 bars at 100 followed by `last`.
    fn volumes(last: f64) -> Vec<f64> {
        let mut v = vec![100.0; 19];
        v.push(last);
        v
    }

    #[test]
    fn test_config_validation() {
        let mut config = ScalpingConfig::default();
        assert!(config.validate().is_ok());

        config.oversold = 80.0;
        assert!(config.validate().is_err());

        config = ScalpingConfig {
            volume_period: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversold_surge_beats_downtrend_rule() {
        let strategy = ScalpingStrategy::default();
        // SMA20 = 98.05, SMA5 = 92.2: price above slow average while the
        // fast average is still below it, so the downtrend rule would also match.
        let rec = strategy.evaluate_series(&prices(90.0, 101.0), 20.0, &volumes(300.0));

        assert_eq!(rec.action, Action::Buy);
        assert_eq!(rec.confidence, 0.8);
    }

    #[test]
    fn test_oversold_surge_beats_uptrend_rule() {
        // Default levels keep RSI < 25 and RSI > 55 apart; lower the
        // bullish level so both buy rules match.
        let strategy = ScalpingStrategy::new(ScalpingConfig {
            bullish_rsi: 15.0,
            ..Default::default()
        });
        // SMA20 = 102.6, SMA5 = 110.4, avg volume = 120
        let rec = strategy.evaluate_series(&prices(110.0, 112.0), 20.0, &volumes(300.0));

        assert_eq!(rec.action, Action::Buy);
        assert_eq!(rec.confidence, 0.8);
        assert_eq!(rec.reason, "Deeply oversold with strong volume");
    }

    #[test]
    fn test_overbought_surge_beats_uptrend_rule() {
        let strategy = ScalpingStrategy::default();
        // SMA20 = 101.95, SMA5 = 107.8
        let rec = strategy.evaluate_series(&prices(110.0, 99.0), 80.0, &volumes(300.0));

        assert_eq!(rec.action, Action::Sell);
        assert_eq!(rec.confidence, 0.8);
    }

    #[test]
    fn test_uptrend_rule() {
        let strategy = ScalpingStrategy::default();
        // avg volume = 110, 200 > 198 but not > 220
        let rec = strategy.evaluate_series(&prices(110.0, 112.0), 60.0, &volumes(200.0));

        assert_eq!(rec.action, Action::Buy);
        assert_eq!(rec.confidence, 0.75);
        assert_eq!(rec.reason, "Strong uptrend");
    }

    #[test]
    fn test_downtrend_rule() {
        let strategy = ScalpingStrategy::default();
        let rec = strategy.evaluate_series(&prices(90.0, 88.0), 40.0, &volumes(200.0));

        assert_eq!(rec.action, Action::Sell);
        assert_eq!(rec.confidence, 0.75);
    }

    #[test]
    fn test_no_volume_surge_holds() {
        let strategy = ScalpingStrategy::default();
        let rec = strategy.evaluate_series(&prices(110.0, 112.0), 60.0, &volumes(150.0));

        assert_eq!(rec.action, Action::Hold);
        assert_eq!(rec.confidence, 0.0);
    }

    #[test]
    fn test_empty_inputs_hold() {
        let strategy = ScalpingStrategy::default();

        assert_eq!(strategy.evaluate_series(&[], 10.0, &[]).action, Action::Hold);
        assert_eq!(
            strategy.evaluate_series(&[1.0, 2.0], 10.0, &[]).action,
            Action::Hold
        );
    }

    #[test]
    fn test_short_series_compares_against_zero_average() {
        let strategy = ScalpingStrategy::default();
        // Fewer than 20 prices: SMA20 reads 0, so any positive price is
        // "above" it; fewer than 10 volumes: average volume reads 0.
        let rec = strategy.evaluate_series(&[5.0, 4.0, 3.0], 10.0, &[1.0, 1.0, 1.0]);

        assert_eq!(rec.action, Action::Buy);
        assert_eq!(rec.confidence, 0.8);
    }
}
