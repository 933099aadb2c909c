//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `SIGNALS__*` environment variables (`SIGNALS__ENGINE__RSI_PERIOD=21`).

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig, StrategySettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SIGNALS";

/// Load configuration from an optional file and the environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_environment(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(
    path: Option<&Path>,
    environment: Environment,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder.add_source(environment).build()?.try_deserialize()
}
