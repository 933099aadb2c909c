//! Validate configuration command.

use anyhow::Result;
use signal_config::AppConfig;
use std::path::Path;

pub async fn run(config_path: Option<&Path>, config: &AppConfig) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {:?}", path),
        None => println!("Validating built-in defaults and environment overrides"),
    }

    match config.validate() {
        Ok(()) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Graph API: {}", config.provider.graph_url);
            println!("Timeframe: {}", config.engine.timeframe);
            println!("Candles: {}", config.engine.candle_count);
            println!("Minimum data points: {}", config.engine.min_data_points);
            println!("RSI period: {}", config.engine.rsi_period);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
