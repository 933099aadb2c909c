//! Strategy trait definitions.

use crate::error::StrategyError;
use crate::types::{MarketSnapshot, Recommendation, StrategyKind};

/// Configuration trait for strategies.
pub trait StrategyConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), StrategyError>;
}

/// Core strategy trait.
///
/// A strategy is a stateless decision function: given a snapshot and the
/// RSI the orchestrator derived from it, it returns exactly one
/// recommendation. Rules are checked top to bottom and the first match
/// wins.
pub trait Strategy: Send + Sync {
    /// Which built-in evaluator this is.
    fn kind(&self) -> StrategyKind;

    /// Get the human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Evaluate the snapshot.
    ///
    /// Must be total: any input, including empty series, yields a
    /// well-formed recommendation.
    fn evaluate(&self, snapshot: &MarketSnapshot, rsi: f64) -> Recommendation;

    /// Get the longest lookback this strategy reads.
    fn warmup_period(&self) -> usize;

    /// Check if the strategy sees its full lookback.
    fn is_warmed_up(&self, bars_available: usize) -> bool {
        bars_available >= self.warmup_period()
    }

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysHold;

    impl Strategy for AlwaysHold {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Orb
        }

        fn name(&self) -> &str {
            "hold"
        }

        fn evaluate(&self, _snapshot: &MarketSnapshot, _rsi: f64) -> Recommendation {
            Recommendation::hold("never trades")
        }

        fn warmup_period(&self) -> usize {
            20
        }
    }

    #[test]
    fn test_strategy_warmup() {
        let strategy = AlwaysHold;

        assert!(!strategy.is_warmed_up(10));
        assert!(!strategy.is_warmed_up(19));
        assert!(strategy.is_warmed_up(20));
        assert!(strategy.is_warmed_up(100));
        assert_eq!(strategy.description(), "");
    }

    #[test]
    fn test_strategy_is_object_safe() {
        let boxed: Box<dyn Strategy> = Box::new(AlwaysHold);
        let rec = boxed.evaluate(&MarketSnapshot::default(), 50.0);
        assert!(!rec.is_actionable());
    }
}
