//! Market data provider trait.

use crate::error::DataError;
use crate::types::{Bar, Timeframe};
use async_trait::async_trait;

/// Source of historical candles for the engine.
///
/// Implementations own all I/O: transport, numeric coercion of wire
/// values, and any retry or timeout policy. The engine only sees the
/// returned bars.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the most recent `count` bars for `symbol`.
    ///
    /// # Returns
    /// Bars ordered from oldest to newest. Fewer than `count` bars is not
    /// an error.
    async fn fetch_bars(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<Vec<Bar>, DataError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}
