//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators reduce a price sequence (oldest first) to the value for the
/// most recent point. They never fail: when there is not enough data they
/// return a documented sentinel value instead.
pub trait Indicator: Send + Sync {
    /// Calculate the indicator value at the end of `data`.
    fn calculate(&self, data: &[f64]) -> f64;

    /// Get the minimum data points required for a non-sentinel value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Check that there is enough data for a non-sentinel value.
    fn is_ready(&self, data: &[f64]) -> bool {
        data.len() >= self.period()
    }
}
