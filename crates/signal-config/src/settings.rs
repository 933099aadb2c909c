//! Configuration structures.

use serde::{Deserialize, Serialize};
use signal_core::error::{SignalError, SignalResult};
use signal_core::traits::StrategyConfig;
use signal_data::ProviderConfig;
use signal_engine::{EngineConfig, SignalEngine};
use signal_strategies::{OrbConfig, ScalpingConfig, StrategySet, TurtleConfig};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub strategies: StrategySettings,
}

impl AppConfig {
    /// Validate every section.
    pub fn validate(&self) -> SignalResult<()> {
        if self.provider.graph_url.trim().is_empty() {
            return Err(SignalError::Config("Provider URL must not be empty".into()));
        }
        if self.provider.timeout_secs == 0 {
            return Err(SignalError::Config(
                "Provider timeout must be greater than 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(SignalError::Config(format!(
                "Unknown log format: {}",
                self.logging.format
            )));
        }

        self.engine.validate()?;
        self.strategies.turtle.validate()?;
        self.strategies.scalping.validate()?;
        self.strategies.orb.validate()?;
        Ok(())
    }

    /// Build the configured evaluators.
    pub fn strategy_set(&self) -> SignalResult<StrategySet> {
        Ok(StrategySet::from_configs(
            self.strategies.turtle.clone(),
            self.strategies.scalping.clone(),
            self.strategies.orb.clone(),
        )?)
    }

    /// Build an engine from the configured sections.
    pub fn engine(&self) -> SignalResult<SignalEngine> {
        SignalEngine::new(self.engine.clone(), self.strategy_set()?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> SignalResult<String> {
        toml::to_string_pretty(self).map_err(|e| SignalError::Serialization(e.to_string()))
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
    /// Pair used when the CLI is not given one
    pub default_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signals".to_string(),
            environment: "development".to_string(),
            default_symbol: "BTCTRY".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// Per-strategy tuning.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrategySettings {
    #[serde(default)]
    pub turtle: TurtleConfig,
    #[serde(default)]
    pub scalping: ScalpingConfig,
    #[serde(default)]
    pub orb: OrbConfig,
}
