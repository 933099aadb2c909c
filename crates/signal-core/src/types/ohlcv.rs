//! OHLCV candles and the market-data snapshot handed to the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Timeframe;
use crate::error::DataError;

/// A single OHLCV candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Whether every numeric field is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Closes and volumes for one symbol, oldest first.
///
/// Index `len() - 1` is the current bar. Built once per evaluation and
/// never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Symbol identifier (e.g. `BTCTRY`)
    pub symbol: String,
    /// Resolution of the underlying candles
    pub timeframe: Timeframe,
    /// Closing prices
    pub closes: Vec<f64>,
    /// Traded volumes, aligned with `closes`
    pub volumes: Vec<f64>,
}

impl MarketSnapshot {
    /// Create a snapshot from raw close and volume vectors.
    pub fn new(
        symbol: impl Into<String>,
        timeframe: Timeframe,
        closes: Vec<f64>,
        volumes: Vec<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            closes,
            volumes,
        }
    }

    /// Create a snapshot from bars ordered oldest to newest.
    pub fn from_bars(symbol: impl Into<String>, timeframe: Timeframe, bars: &[Bar]) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            closes: bars.iter().map(|b| b.close).collect(),
            volumes: bars.iter().map(|b| b.volume).collect(),
        }
    }

    /// Number of data points (closes).
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if the snapshot holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// The current (most recent) close.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// The current (most recent) volume.
    pub fn last_volume(&self) -> Option<f64> {
        self.volumes.last().copied()
    }

    /// Check that the series are aligned and hold only finite numbers.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.closes.len() != self.volumes.len() {
            return Err(DataError::MalformedSeries(format!(
                "{} closes but {} volumes",
                self.closes.len(),
                self.volumes.len()
            )));
        }
        if let Some(i) = self.closes.iter().position(|v| !v.is_finite()) {
            return Err(DataError::MalformedSeries(format!(
                "non-numeric close at index {}",
                i
            )));
        }
        if let Some(i) = self.volumes.iter().position(|v| !v.is_finite()) {
            return Err(DataError::MalformedSeries(format!(
                "non-numeric volume at index {}",
                i
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<Bar> {
        vec![
            Bar::new(1, 100.0, 101.0, 99.0, 100.5, 1000.0),
            Bar::new(2, 100.5, 102.0, 100.0, 101.5, 2000.0),
        ]
    }

    #[test]
    fn test_snapshot_from_bars() {
        let snapshot = MarketSnapshot::from_bars("BTCTRY", Timeframe::Hour1, &bars());

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.closes, vec![100.5, 101.5]);
        assert_eq!(snapshot.volumes, vec![1000.0, 2000.0]);
        assert_eq!(snapshot.last_close(), Some(101.5));
        assert_eq!(snapshot.last_volume(), Some(2000.0));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MarketSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.last_close(), None);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_misaligned_series() {
        let snapshot = MarketSnapshot::new("X", Timeframe::Hour1, vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(
            snapshot.validate(),
            Err(DataError::MalformedSeries(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let snapshot = MarketSnapshot::new(
            "X",
            Timeframe::Hour1,
            vec![1.0, f64::NAN],
            vec![1.0, 1.0],
        );
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_bar_is_finite() {
        assert!(bars()[0].is_finite());
        assert!(!Bar::new(0, 1.0, 1.0, 1.0, f64::INFINITY, 1.0).is_finite());
    }
}
