//! Strategy registry and the configured set used by the engine.

use crate::{
    OrbConfig, OrbStrategy, ScalpingConfig, ScalpingStrategy, TurtleConfig, TurtleStrategy,
};
use serde::{Deserialize, Serialize};
use signal_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::StrategyKind,
};
use std::collections::HashMap;

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Selector key (`turtle`, `scalping`, `orb`)
    pub key: StrategyKind,
    /// Strategy name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry for the built-in strategies.
pub struct StrategyRegistry {
    strategies: HashMap<StrategyKind, StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a new strategy registry with all built-in strategies.
    pub fn new() -> Self {
        let mut strategies = HashMap::new();

        for &kind in StrategyKind::all() {
            let (strategy, default_config): (Box<dyn Strategy>, serde_json::Value) = match kind {
                StrategyKind::Turtle => (
                    Box::new(TurtleStrategy::default()),
                    serde_json::to_value(TurtleConfig::default()).unwrap_or_default(),
                ),
                StrategyKind::Scalping => (
                    Box::new(ScalpingStrategy::default()),
                    serde_json::to_value(ScalpingConfig::default()).unwrap_or_default(),
                ),
                StrategyKind::Orb => (
                    Box::new(OrbStrategy::default()),
                    serde_json::to_value(OrbConfig::default()).unwrap_or_default(),
                ),
            };

            strategies.insert(
                kind,
                StrategyInfo {
                    key: kind,
                    name: strategy.name().to_string(),
                    description: strategy.description().to_string(),
                    default_config,
                },
            );
        }

        Self { strategies }
    }

    /// List all available strategies in selector order.
    pub fn list(&self) -> Vec<&StrategyInfo> {
        StrategyKind::all()
            .iter()
            .filter_map(|kind| self.strategies.get(kind))
            .collect()
    }

    /// Get strategy info by selector.
    pub fn get(&self, kind: StrategyKind) -> Option<&StrategyInfo> {
        self.strategies.get(&kind)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One configured instance of every built-in strategy.
#[derive(Debug, Clone, Default)]
pub struct StrategySet {
    turtle: TurtleStrategy,
    scalping: ScalpingStrategy,
    orb: OrbStrategy,
}

impl StrategySet {
    /// Build the set from validated configurations.
    pub fn from_configs(
        turtle: TurtleConfig,
        scalping: ScalpingConfig,
        orb: OrbConfig,
    ) -> Result<Self, StrategyError> {
        turtle.validate()?;
        scalping.validate()?;
        orb.validate()?;

        Ok(Self {
            turtle: TurtleStrategy::new(turtle),
            scalping: ScalpingStrategy::new(scalping),
            orb: OrbStrategy::new(orb),
        })
    }

    /// Get the evaluator for a selector.
    pub fn get(&self, kind: StrategyKind) -> &dyn Strategy {
        match kind {
            StrategyKind::Turtle => &self.turtle,
            StrategyKind::Scalping => &self.scalping,
            StrategyKind::Orb => &self.orb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_list() {
        let registry = StrategyRegistry::new();
        let keys: Vec<_> = registry.list().iter().map(|info| info.key).collect();

        assert_eq!(
            keys,
            vec![StrategyKind::Turtle, StrategyKind::Scalping, StrategyKind::Orb]
        );
    }

    #[test]
    fn test_registry_get() {
        let registry = StrategyRegistry::new();
        let info = registry.get(StrategyKind::Turtle).unwrap();

        assert_eq!(info.name, "Turtle Breakout");
        assert_eq!(info.default_config["entry_period"], 20);
    }

    #[test]
    fn test_strategy_set_dispatch() {
        let set = StrategySet::default();
        for &kind in StrategyKind::all() {
            assert_eq!(set.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_strategy_set_rejects_invalid_config() {
        let turtle = TurtleConfig {
            entry_period: 0,
            ..Default::default()
        };
        let result =
            StrategySet::from_configs(turtle, ScalpingConfig::default(), OrbConfig::default());
        assert!(result.is_err());
    }

    mod totality {
        use crate::StrategySet;
        use proptest::prelude::{prop, prop_assert, proptest};
        use signal_core::types::{MarketSnapshot, StrategyKind, Timeframe};

        proptest! {
            #[test]
            fn prop_every_strategy_is_total(
                closes in prop::collection::vec(0.0f64..1e6, 0..80),
                volumes in prop::collection::vec(0.0f64..1e6, 0..80),
                rsi in 0.0f64..=100.0,
            ) {
                let set = StrategySet::default();
                let snapshot = MarketSnapshot::new("X", Timeframe::Hour1, closes, volumes);

                for &kind in StrategyKind::all() {
                    let rec = set.get(kind).evaluate(&snapshot, rsi);
                    prop_assert!(rec.is_well_formed());
                    prop_assert!(rec.is_actionable() || rec.confidence == 0.0);
                }
            }
        }
    }
}
