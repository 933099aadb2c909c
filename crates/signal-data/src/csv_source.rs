//! CSV data source.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use signal_core::error::DataError;
use signal_core::traits::MarketDataProvider;
use signal_core::types::{Bar, Timeframe};
use std::path::Path;
use tracing::debug;

use crate::{tail, timestamp_millis};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(
        alias = "Date",
        alias = "date",
        alias = "timestamp",
        alias = "Timestamp",
        alias = "time"
    )]
    date: String,
    #[serde(alias = "Open", alias = "open", default)]
    open: Option<f64>,
    #[serde(alias = "High", alias = "high", default)]
    high: Option<f64>,
    #[serde(alias = "Low", alias = "low", default)]
    low: Option<f64>,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV file of historical candles.
pub struct CsvDataSource {
    path: String,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load all bars from the CSV file, sorted oldest first.
    pub fn load_all(&self) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;
            let bar = Bar::new(
                timestamp,
                record.open.unwrap_or(record.close),
                record.high.unwrap_or(record.close),
                record.low.unwrap_or(record.close),
                record.close,
                record.volume,
            );

            if !bar.is_finite() {
                return Err(DataError::ParseError(format!(
                    "non-finite value in row dated {}",
                    record.date
                )));
            }
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.timestamp);
        debug!(path = %self.path, bars = bars.len(), "loaded csv");

        Ok(bars)
    }
}

#[async_trait]
impl MarketDataProvider for CsvDataSource {
    async fn fetch_bars(
        &self,
        _symbol: &str,
        _timeframe: Timeframe,
        count: usize,
    ) -> Result<Vec<Bar>, DataError> {
        Ok(tail(self.load_all()?, count))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse various timestamp formats into unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    for format in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    for format in date_formats {
        if let Some(dt) = NaiveDate::parse_from_str(date_str, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(ts) = date_str.parse::<i64>() {
        return timestamp_millis(ts);
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
