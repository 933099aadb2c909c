//! Wire-format candles.

use serde::Deserialize;
use signal_core::error::DataError;
use signal_core::types::Bar;

use crate::timestamp_millis;

/// A numeric value that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Parse into a finite `f64`, naming `field` in the error.
    pub fn to_f64(&self, field: &str) -> Result<f64, DataError> {
        let value = match self {
            NumericField::Number(n) => *n,
            NumericField::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                DataError::ParseError(format!("{} is not a number: {:?}", field, s))
            })?,
        };

        if !value.is_finite() {
            return Err(DataError::ParseError(format!(
                "{} is not finite: {}",
                field, value
            )));
        }
        Ok(value)
    }
}

/// A candle as returned by the exchange graph API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandle {
    #[serde(default, alias = "timestamp", alias = "t")]
    pub time: Option<NumericField>,
    #[serde(default)]
    pub open: Option<NumericField>,
    #[serde(default)]
    pub high: Option<NumericField>,
    #[serde(default)]
    pub low: Option<NumericField>,
    pub close: NumericField,
    pub volume: NumericField,
}

impl RawCandle {
    /// Convert into a validated [`Bar`].
    ///
    /// Only `close` and `volume` are required; missing open/high/low fall
    /// back to the close.
    pub fn to_bar(&self) -> Result<Bar, DataError> {
        let close = self.close.to_f64("close")?;
        let volume = self.volume.to_f64("volume")?;
        let optional = |field: &Option<NumericField>, name: &str| -> Result<f64, DataError> {
            match field {
                Some(v) => v.to_f64(name),
                None => Ok(close),
            }
        };

        let timestamp = match &self.time {
            Some(t) => timestamp_millis(t.to_f64("time")? as i64)?,
            None => 0,
        };

        Ok(Bar::new(
            timestamp,
            optional(&self.open, "open")?,
            optional(&self.high, "high")?,
            optional(&self.low, "low")?,
            close,
            volume,
        ))
    }
}

/// Body of an OHLC response. A missing `data` field reads as no candles.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcResponse {
    #[serde(default)]
    pub data: Vec<RawCandle>,
}

impl OhlcResponse {
    /// Convert every candle, sorted oldest first.
    pub fn into_bars(self) -> Result<Vec<Bar>, DataError> {
        let mut bars = self
            .data
            .iter()
            .map(RawCandle::to_bar)
            .collect::<Result<Vec<_>, _>>()?;
        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}
