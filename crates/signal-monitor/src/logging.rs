//! Logging setup.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Setup logging with the given level.
///
/// `RUST_LOG` takes precedence over `level`. When `file` is set, events are
/// also written to a daily-rolling file next to it; keep the returned guard
/// alive until shutdown so buffered lines are flushed.
pub fn setup_logging(
    level: &str,
    json: bool,
    file: Option<&str>,
) -> Result<Option<WorkerGuard>, TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().pretty().boxed()
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let (dir, prefix) = split_log_path(path);
            let appender = tracing_appender::rolling::daily(dir, prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// Split a log path into its directory and file-name prefix.
fn split_log_path(path: &str) -> (&Path, &str) {
    let path = Path::new(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("signals.log");
    (dir, prefix)
}
