//! Signal orchestration.
//!
//! [`SignalEngine`] picks an evaluator by name, guards against short or
//! malformed data, derives the shared RSI and returns a recommendation. It
//! never returns an error: every failure degrades to a hold that carries
//! the failure description.

mod engine;
mod report;

pub use engine::{EngineConfig, SignalEngine, INSUFFICIENT_DATA};
pub use report::SignalReport;
