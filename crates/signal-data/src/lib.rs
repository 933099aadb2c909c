//! Market data ingestion.
//!
//! Everything that turns exchange or file data into [`Bar`]s lives here,
//! including the explicit coercion of numeric strings. The engine itself
//! only ever sees validated `f64` values.

mod candle;
mod csv_source;
mod graph_api;

pub use candle::{NumericField, OhlcResponse, RawCandle};
pub use csv_source::CsvDataSource;
pub use graph_api::{GraphApiClient, ProviderConfig};

use signal_core::error::DataError;
use signal_core::types::Bar;

/// Keep the last `count` bars.
pub(crate) fn tail(mut bars: Vec<Bar>, count: usize) -> Vec<Bar> {
    let start = bars.len().saturating_sub(count);
    bars.drain(..start);
    bars
}

/// Interpret a numeric timestamp as milliseconds.
///
/// Values with ten digits or fewer are taken as seconds.
pub(crate) fn timestamp_millis(ts: i64) -> Result<i64, DataError> {
    if ts > 10_000_000_000 {
        Ok(ts)
    } else {
        ts.checked_mul(1000)
            .ok_or_else(|| DataError::ParseError(format!("timestamp out of range: {}", ts)))
    }
}
