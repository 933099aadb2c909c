//! Candle resolutions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Resolution of the candles a snapshot is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    /// 1 minute candles
    #[serde(rename = "1m")]
    Minute1,
    /// 5 minute candles
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minute candles
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minute candles
    #[serde(rename = "30m")]
    Minute30,
    /// 1 hour candles
    #[serde(rename = "1h")]
    #[default]
    Hour1,
    /// 4 hour candles
    #[serde(rename = "4h")]
    Hour4,
    /// Daily candles
    #[serde(rename = "1d")]
    Daily,
    /// Weekly candles
    #[serde(rename = "1w")]
    Weekly,
}

impl Timeframe {
    /// Resolution key, as sent to the graph API and used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Minute1 => "1m",
            Timeframe::Minute5 => "5m",
            Timeframe::Minute15 => "15m",
            Timeframe::Minute30 => "30m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour4 => "4h",
            Timeframe::Daily => "1d",
            Timeframe::Weekly => "1w",
        }
    }

    /// Get all available timeframes.
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Minute1,
            Timeframe::Minute5,
            Timeframe::Minute15,
            Timeframe::Minute30,
            Timeframe::Hour1,
            Timeframe::Hour4,
            Timeframe::Daily,
            Timeframe::Weekly,
        ]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = match key.as_str() {
            "hourly" => "1h",
            "daily" => "1d",
            "weekly" => "1w",
            other => other,
        };

        Timeframe::all()
            .iter()
            .copied()
            .find(|tf| tf.as_str() == key)
            .ok_or_else(|| DataError::InvalidTimeframe(s.to_string()))
    }
}
