//! Error types for the signal engine.

use thiserror::Error;

/// Top-level signal engine error.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Strategy-specific errors.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),

    #[error("Computation failed: {0}")]
    Computation(String),
}

/// Market data errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Malformed series: {0}")]
    MalformedSeries(String),
}

/// Result type alias for signal engine operations.
pub type SignalResult<T> = Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_converts_with_context() {
        let err: SignalError =
            DataError::MalformedSeries("non-numeric close at index 3".into()).into();
        assert_eq!(
            err.to_string(),
            "Data error: Malformed series: non-numeric close at index 3"
        );
    }

    #[test]
    fn test_strategy_error_converts() {
        let err: SignalError = StrategyError::Computation("RSI is not a number".into()).into();
        assert!(matches!(err, SignalError::Strategy(StrategyError::Computation(_))));
    }
}
