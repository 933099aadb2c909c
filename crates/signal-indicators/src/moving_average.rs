//! Moving average indicators.

use signal_core::traits::Indicator;

/// Simple moving average of the last `period` values.
///
/// Returns `0.0` when `data` holds fewer than `period` values. Callers must
/// read that zero as "undefined".
pub fn sma(data: &[f64], period: usize) -> f64 {
    if data.len() < period {
        return 0.0;
    }

    let sum: f64 = data[data.len() - period..].iter().sum();
    sum / period as f64
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> f64 {
        sma(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}
