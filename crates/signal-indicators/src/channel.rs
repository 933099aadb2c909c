//! Rolling price extremes.

/// Highest of the last `lookback` values, or `None` for an empty slice.
///
/// Shorter slices use whatever is available.
pub fn highest(data: &[f64], lookback: usize) -> Option<f64> {
    let start = data.len().saturating_sub(lookback);
    data[start..].iter().cloned().reduce(f64::max)
}

/// Lowest of the last `lookback` values, or `None` for an empty slice.
pub fn lowest(data: &[f64], lookback: usize) -> Option<f64> {
    let start = data.len().saturating_sub(lookback);
    data[start..].iter().cloned().reduce(f64::min)
}

/// High/low channel over a trailing window (Donchian style).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Highest value in the window
    pub high: f64,
    /// Lowest value in the window
    pub low: f64,
}

impl Channel {
    /// Build the channel over the last `lookback` values.
    pub fn over(data: &[f64], lookback: usize) -> Option<Self> {
        Some(Self {
            high: highest(data, lookback)?,
            low: lowest(data, lookback)?,
        })
    }

    /// Width of the channel.
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}
