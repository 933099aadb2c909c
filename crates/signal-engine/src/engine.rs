//! Signal engine.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use signal_core::error::{SignalError, SignalResult, StrategyError};
use signal_core::traits::{Indicator, MarketDataProvider};
use signal_core::types::{MarketSnapshot, Recommendation, StrategyKind, Timeframe};
use signal_indicators::{Rsi, DEFAULT_RSI_PERIOD};
use signal_strategies::StrategySet;
use tracing::{debug, info, warn};

use crate::report::SignalReport;

/// Reason attached to holds issued for short snapshots.
pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Snapshots shorter than this are answered with a hold
    pub min_data_points: usize,
    /// RSI period handed to the evaluators
    pub rsi_period: usize,
    /// Candles requested from the provider
    pub candle_count: usize,
    /// Candle resolution requested from the provider
    pub timeframe: Timeframe,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_data_points: 20,
            rsi_period: DEFAULT_RSI_PERIOD,
            candle_count: 100,
            timeframe: Timeframe::Hour1,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> SignalResult<()> {
        if self.rsi_period == 0 {
            return Err(SignalError::Config(
                "RSI period must be greater than 0".into(),
            ));
        }
        if self.candle_count == 0 {
            return Err(SignalError::Config(
                "Candle count must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Stateless orchestrator.
///
/// Safe to share across tasks; every call works only on its arguments.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: EngineConfig,
    strategies: StrategySet,
    rsi: Rsi,
}

struct Evaluation {
    recommendation: Recommendation,
    rsi: Option<f64>,
}

impl SignalEngine {
    /// Create a new engine.
    pub fn new(config: EngineConfig, strategies: StrategySet) -> SignalResult<Self> {
        config.validate()?;
        let rsi = Rsi::new(config.rsi_period);
        Ok(Self {
            config,
            strategies,
            rsi,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate `snapshot` with the strategy called `strategy`.
    ///
    /// Unknown strategy names use the opening-range breakout evaluator.
    pub fn evaluate(&self, strategy: &str, snapshot: &MarketSnapshot) -> Recommendation {
        self.evaluate_report(strategy, snapshot).recommendation
    }

    /// Same as [`SignalEngine::evaluate`], with the inputs that produced the
    /// recommendation.
    pub fn evaluate_report(&self, strategy: &str, snapshot: &MarketSnapshot) -> SignalReport {
        let kind = StrategyKind::from_name(strategy);
        if kind.as_str() != strategy {
            debug!(requested = strategy, using = %kind, "resolved strategy name");
        }

        let evaluation = match self.try_evaluate(kind, snapshot) {
            Ok(evaluation) => evaluation,
            Err(e) => {
                warn!(symbol = %snapshot.symbol, strategy = %kind, error = %e, "evaluation failed");
                Evaluation {
                    recommendation: Recommendation::hold(format!("error: {}", e)),
                    rsi: None,
                }
            }
        };

        let recommendation = evaluation.recommendation;
        if recommendation.is_actionable() {
            info!(
                symbol = %snapshot.symbol,
                strategy = %kind,
                action = %recommendation.action,
                confidence = recommendation.confidence,
                reason = %recommendation.reason,
                "signal"
            );
        }

        SignalReport {
            symbol: snapshot.symbol.clone(),
            strategy: kind,
            timeframe: snapshot.timeframe,
            data_points: snapshot.len(),
            last_close: snapshot.last_close(),
            rsi: evaluation.rsi,
            recommendation,
            generated_at: Utc::now(),
        }
    }

    /// Fetch candles for `symbol` and evaluate them.
    pub async fn generate_signal(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        strategy: &str,
    ) -> Recommendation {
        self.generate_report(provider, symbol, strategy)
            .await
            .recommendation
    }

    /// Same as [`SignalEngine::generate_signal`], returning the full report.
    pub async fn generate_report(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        strategy: &str,
    ) -> SignalReport {
        let timeframe = self.config.timeframe;

        match provider
            .fetch_bars(symbol, timeframe, self.config.candle_count)
            .await
        {
            Ok(bars) => {
                debug!(symbol, provider = provider.name(), bars = bars.len(), "fetched candles");
                let snapshot = MarketSnapshot::from_bars(symbol, timeframe, &bars);
                self.evaluate_report(strategy, &snapshot)
            }
            Err(e) => {
                warn!(symbol, provider = provider.name(), error = %e, "market data unavailable");
                SignalReport {
                    symbol: symbol.to_string(),
                    strategy: StrategyKind::from_name(strategy),
                    timeframe,
                    data_points: 0,
                    last_close: None,
                    rsi: None,
                    recommendation: Recommendation::hold(format!("error: {}", e)),
                    generated_at: Utc::now(),
                }
            }
        }
    }

    fn try_evaluate(
        &self,
        kind: StrategyKind,
        snapshot: &MarketSnapshot,
    ) -> SignalResult<Evaluation> {
        if snapshot.len() < self.config.min_data_points {
            debug!(
                symbol = %snapshot.symbol,
                have = snapshot.len(),
                need = self.config.min_data_points,
                "not enough data"
            );
            return Ok(Evaluation {
                recommendation: Recommendation::hold(INSUFFICIENT_DATA),
                rsi: None,
            });
        }

        snapshot.validate()?;

        if !self.rsi.is_ready(&snapshot.closes) {
            debug!(symbol = %snapshot.symbol, "RSI window not filled, using neutral value");
        }
        let rsi = self.rsi.calculate(&snapshot.closes);
        if !rsi.is_finite() {
            return Err(StrategyError::Computation(format!("RSI is not a number ({})", rsi)).into());
        }

        let strategy = self.strategies.get(kind);
        if !strategy.is_warmed_up(snapshot.len()) {
            debug!(
                symbol = %snapshot.symbol,
                strategy = strategy.name(),
                have = snapshot.len(),
                lookback = strategy.warmup_period(),
                "evaluating with a partial lookback"
            );
        }

        let recommendation = strategy.evaluate(snapshot, rsi);
        if !recommendation.is_well_formed() {
            return Err(StrategyError::Computation(format!(
                "{} produced an invalid recommendation: {}",
                kind, recommendation
            ))
            .into());
        }

        Ok(Evaluation {
            recommendation,
            rsi: Some(rsi),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use signal_core::error::DataError;
    use signal_core::types::{Action, Bar};
    use signal_strategies::{OrbConfig, ScalpingConfig, TurtleConfig};

    fn snapshot(closes: Vec<f64>) -> MarketSnapshot {
        let volumes = vec![100.0; closes.len()];
        MarketSnapshot::new("BTCTRY", Timeframe::Hour1, closes, volumes)
    }

    struct StaticProvider(Result<Vec<Bar>, String>);

    #[async_trait]
    impl MarketDataProvider for StaticProvider {
        async fn fetch_bars(
            &self,
            _symbol: &str,
            _timeframe: Timeframe,
            count: usize,
        ) -> Result<Vec<Bar>, DataError> {
            match &self.0 {
                Ok(bars) => Ok(bars.iter().rev().take(count).rev().cloned().collect()),
                Err(msg) => Err(DataError::ConnectionError(msg.clone())),
            }
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[test]
    fn test_insufficient_data_for_every_strategy() {
        let engine = SignalEngine::default();
        let short = snapshot((0..10).map(|i| 100.0 + i as f64).collect());

        for name in ["turtle", "scalping", "orb", "unknown"] {
            let rec = engine.evaluate(name, &short);
            assert_eq!(rec.action, Action::Hold);
            assert_eq!(rec.confidence, 0.0);
            assert_eq!(rec.reason, INSUFFICIENT_DATA);
        }
    }

    #[test]
    fn test_insufficient_data_checked_before_validation() {
        let engine = SignalEngine::default();
        let short = snapshot(vec![f64::NAN; 5]);

        assert_eq!(engine.evaluate("turtle", &short).reason, INSUFFICIENT_DATA);
    }

    #[test]
    fn test_malformed_input_becomes_error_hold() {
        let engine = SignalEngine::default();
        let mut closes = vec![100.0; 30];
        closes[12] = f64::NAN;

        let rec = engine.evaluate("scalping", &snapshot(closes));
        assert_eq!(rec.action, Action::Hold);
        assert_eq!(rec.confidence, 0.0);
        assert!(rec.reason.starts_with("error:"));
        assert!(rec.reason.contains("index 12"));
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_orb() {
        let engine = SignalEngine::default();
        let data = snapshot((0..30).map(|i| 100.0 + (i % 5) as f64).collect());

        let report = engine.evaluate_report("martingale", &data);
        assert_eq!(report.strategy, StrategyKind::Orb);
        assert_eq!(report.recommendation.reason, "No ORB signal");
    }

    #[test]
    fn test_strategy_names_are_matched_exactly() {
        let engine = SignalEngine::default();
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let mut volumes = vec![100.0; 30];
        volumes[29] = 200.0;
        let data = MarketSnapshot::new("BTCTRY", Timeframe::Hour1, closes, volumes);

        for name in ["Scalping", "scalp", " SCALPING ", "Turtle"] {
            let report = engine.evaluate_report(name, &data);
            assert_eq!(report.strategy, StrategyKind::Orb, "{name}");
            assert_eq!(report.recommendation.reason, "No ORB signal");
        }
        assert_eq!(
            engine.evaluate_report("scalping", &data).recommendation.reason,
            "Strong uptrend"
        );
    }

    #[test]
    fn test_scalping_dispatch_uses_engine_rsi() {
        let engine = SignalEngine::default();
        // Steady climb: RSI 100, fast average above slow, volume surge.
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let mut volumes = vec![100.0; 30];
        volumes[29] = 200.0;
        let data = MarketSnapshot::new("BTCTRY", Timeframe::Hour1, closes, volumes);

        let report = engine.evaluate_report("scalping", &data);
        assert_eq!(report.rsi, Some(100.0));
        assert_eq!(report.recommendation.action, Action::Buy);
        assert_eq!(report.recommendation.confidence, 0.75);
    }

    #[test]
    fn test_turtle_on_snapshot_holds() {
        let engine = SignalEngine::default();
        let data = snapshot((0..60).map(|i| 100.0 + i as f64).collect());

        let rec = engine.evaluate("turtle", &data);
        assert_eq!(rec.action, Action::Hold);
        assert_eq!(rec.reason, "No turtle signal");
    }

    #[test]
    fn test_custom_minimum() {
        let config = EngineConfig {
            min_data_points: 5,
            ..Default::default()
        };
        let engine = SignalEngine::new(config, StrategySet::default()).unwrap();
        let data = snapshot(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_ne!(engine.evaluate("orb", &data).reason, INSUFFICIENT_DATA);
    }

    #[test]
    fn test_invalid_engine_config() {
        let config = EngineConfig {
            rsi_period: 0,
            ..Default::default()
        };
        assert!(SignalEngine::new(config, StrategySet::default()).is_err());
    }

    #[test]
    fn test_engine_built_from_configs() {
        let strategies = StrategySet::from_configs(
            TurtleConfig::default(),
            ScalpingConfig::default(),
            OrbConfig {
                range_period: 10,
                ..Default::default()
            },
        )
        .unwrap();
        let engine = SignalEngine::new(EngineConfig::default(), strategies).unwrap();

        let rec = engine.evaluate("orb", &snapshot(vec![100.0; 25]));
        assert_eq!(rec.action, Action::Hold);
    }

    #[tokio::test]
    async fn test_generate_signal_from_provider() {
        let bars: Vec<Bar> = (0..150)
            .map(|i| Bar::new(i, 1.0, 1.0, 1.0, 100.0 + i as f64, 100.0))
            .collect();
        let provider = StaticProvider(Ok(bars));
        let engine = SignalEngine::default();

        let report = engine.generate_report(&provider, "BTCTRY", "turtle").await;
        assert_eq!(report.data_points, 100);
        assert_eq!(report.last_close, Some(249.0));
        assert_eq!(report.recommendation.action, Action::Hold);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_error_hold() {
        let provider = StaticProvider(Err("connection refused".to_string()));
        let engine = SignalEngine::default();

        let rec = engine.generate_signal(&provider, "BTCTRY", "scalping").await;
        assert_eq!(rec.action, Action::Hold);
        assert_eq!(rec.confidence, 0.0);
        assert!(rec.reason.starts_with("error:"));
        assert!(rec.reason.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_short_provider_history() {
        let bars: Vec<Bar> = (0..10)
            .map(|i| Bar::new(i, 1.0, 1.0, 1.0, 100.0, 100.0))
            .collect();
        let provider = StaticProvider(Ok(bars));
        let engine = SignalEngine::default();

        let rec = engine.generate_signal(&provider, "BTCTRY", "orb").await;
        assert_eq!(rec.reason, INSUFFICIENT_DATA);
    }

    mod totality {
        use crate::SignalEngine;
        use proptest::prelude::{prop, prop_assert, proptest};
        use signal_core::types::{MarketSnapshot, Timeframe};

        proptest! {
            #[test]
            fn prop_engine_always_answers(
                closes in prop::collection::vec(prop::num::f64::ANY, 0..80),
                volumes in prop::collection::vec(prop::num::f64::ANY, 0..80),
                name in "[a-z]{0,10}",
            ) {
                let engine = SignalEngine::default();
                let snapshot = MarketSnapshot::new("X", Timeframe::Hour1, closes, volumes);

                let rec = engine.evaluate(&name, &snapshot);
                prop_assert!(rec.is_well_formed());
            }
        }
    }
}
