//! Signal report generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signal_core::types::{Recommendation, StrategyKind, Timeframe};

/// A recommendation together with the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    /// Trading pair
    pub symbol: String,
    /// Evaluator that was run
    pub strategy: StrategyKind,
    /// Candle resolution
    pub timeframe: Timeframe,
    /// Number of samples evaluated
    pub data_points: usize,
    /// Most recent close, if any
    pub last_close: Option<f64>,
    /// RSI handed to the evaluator; absent when evaluation stopped early
    pub rsi: Option<f64>,
    /// Outcome
    pub recommendation: Recommendation,
    /// Generation time
    pub generated_at: DateTime<Utc>,
}

impl SignalReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                      SIGNAL REPORT                         \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("MARKET\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Symbol:              {}\n", self.symbol));
        s.push_str(&format!("  Timeframe:           {}\n", self.timeframe));
        s.push_str(&format!("  Data Points:         {}\n", self.data_points));
        s.push_str(&format!(
            "  Last Close:          {}\n",
            fmt_optional(self.last_close)
        ));
        s.push_str(&format!("  RSI:                 {}\n", fmt_optional(self.rsi)));
        s.push('\n');

        s.push_str("RECOMMENDATION\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Strategy:            {}\n", self.strategy));
        s.push_str(&format!(
            "  Action:              {}\n",
            self.recommendation.action
        ));
        s.push_str(&format!(
            "  Confidence:          {:.2}\n",
            self.recommendation.confidence
        ));
        s.push_str(&format!(
            "  Reason:              {}\n",
            self.recommendation.reason
        ));
        s.push_str(&format!(
            "  Generated:           {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn fmt_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}
