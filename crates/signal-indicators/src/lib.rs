//! Technical indicators for the signal engine.
//!
//! This crate provides the indicators the strategy evaluators read:
//! - Simple moving average (SMA)
//! - Single-window relative strength index (RSI)
//! - Rolling extremes (channel high/low)
//!
//! Every indicator is a pure function of an oldest-first price slice and
//! returns a sentinel rather than failing when the slice is too short.

pub mod channel;
pub mod momentum;
pub mod moving_average;

pub use channel::{highest, lowest, Channel};
pub use momentum::{rsi, Rsi, DEFAULT_RSI_PERIOD};
pub use moving_average::{sma, Sma};
