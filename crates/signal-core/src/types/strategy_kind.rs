//! Strategy selectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The built-in evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// 20/55-period channel breakout
    Turtle,
    /// RSI, moving average and volume-surge momentum
    Scalping,
    /// Opening-range breakout
    #[default]
    Orb,
}

impl StrategyKind {
    /// Resolve a strategy name, falling back to [`StrategyKind::Orb`] for
    /// anything that is not exactly one of the keys.
    ///
    /// Unlike [`FromStr`], no trimming, case folding or aliases apply.
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_default()
    }

    /// Stable lower-case key.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Turtle => "turtle",
            StrategyKind::Scalping => "scalping",
            StrategyKind::Orb => "orb",
        }
    }

    /// All built-in strategies.
    pub fn all() -> &'static [StrategyKind] {
        &[StrategyKind::Turtle, StrategyKind::Scalping, StrategyKind::Orb]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "turtle" => Ok(StrategyKind::Turtle),
            "scalping" | "scalp" => Ok(StrategyKind::Scalping),
            "orb" | "opening_range" | "opening-range" => Ok(StrategyKind::Orb),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}
