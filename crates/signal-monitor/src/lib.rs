//! Logging setup for the signal engine binaries.

mod logging;

pub use logging::setup_logging;
pub use tracing_appender::non_blocking::WorkerGuard;
