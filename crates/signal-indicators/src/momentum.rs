//! Momentum indicators.

use signal_core::traits::Indicator;

/// Period used when none is configured.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Relative strength index over the last `period` price changes.
///
/// This is a single-window RSI: gains and losses are averaged once over
/// the trailing window, with no smoothing carried across earlier windows.
/// It is not interchangeable with the smoothed Wilder RSI.
///
/// Returns `50.0` with fewer than `period + 1` values and `100.0` when the
/// window holds no losses.
pub fn rsi(data: &[f64], period: usize) -> f64 {
    if period == 0 || data.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in data.len() - period..data.len() {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Relative Strength Index (RSI).
///
/// Measures the balance of recent gains against recent losses to
/// evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for Rsi {
    fn calculate(&self, data: &[f64]) -> f64 {
        rsi(data, self.period)
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}
