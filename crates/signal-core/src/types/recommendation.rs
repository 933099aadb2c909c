//! Trading recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
            Action::Hold => "hold",
        };
        write!(f, "{}", s)
    }
}

/// The engine's answer for one evaluation.
///
/// Always fully populated: when no rule fires the result is an explicit
/// hold with zero confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// What to do
    pub action: Action,
    /// Self-reported certainty in [0, 1]; 0 for holds
    pub confidence: f64,
    /// Which rule fired
    pub reason: String,
}

impl Recommendation {
    /// A buy recommendation.
    pub fn buy(confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            action: Action::Buy,
            confidence,
            reason: reason.into(),
        }
    }

    /// A sell recommendation.
    pub fn sell(confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            action: Action::Sell,
            confidence,
            reason: reason.into(),
        }
    }

    /// A hold with zero confidence.
    pub fn hold(reason: impl Into<String>) -> Self {
        Self {
            action: Action::Hold,
            confidence: 0.0,
            reason: reason.into(),
        }
    }

    /// Whether the consumer should act on this recommendation.
    pub fn is_actionable(&self) -> bool {
        self.action != Action::Hold
    }

    /// Whether the confidence is a finite value inside [0, 1].
    pub fn is_well_formed(&self) -> bool {
        self.confidence.is_finite()
            && (0.0..=1.0).contains(&self.confidence)
            && !self.reason.is_empty()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}): {}",
            self.action.to_string().to_uppercase(),
            self.confidence,
            self.reason
        )
    }
}
