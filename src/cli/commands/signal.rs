//! Signal command implementation.

use anyhow::{Context, Result};
use signal_config::AppConfig;
use signal_core::traits::MarketDataProvider;
use signal_data::{CsvDataSource, GraphApiClient};
use signal_engine::SignalEngine;
use tracing::info;

use crate::cli::{OutputFormat, SignalArgs};

pub async fn run(args: SignalArgs, config: &AppConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let mut engine_config = config.engine.clone();
    if let Some(timeframe) = args.timeframe {
        engine_config.timeframe = timeframe;
    }
    if let Some(count) = args.count {
        engine_config.candle_count = count;
    }

    let strategies = config
        .strategy_set()
        .context("Failed to build strategies")?;
    let engine = SignalEngine::new(engine_config, strategies)
        .context("Failed to create signal engine")?;

    let provider: Box<dyn MarketDataProvider> = match &args.data {
        Some(path) => {
            let path = path
                .to_str()
                .with_context(|| format!("Data path is not valid UTF-8: {}", path.display()))?;
            Box::new(
                CsvDataSource::new(path)
                    .with_context(|| format!("Data file '{}' not found", path))?,
            )
        }
        None => Box::new(
            GraphApiClient::new(config.provider.clone())
                .context("Failed to create graph API client")?,
        ),
    };

    let symbol = args
        .symbol
        .unwrap_or_else(|| config.app.default_symbol.clone());
    info!(
        symbol = %symbol,
        strategy = %args.strategy,
        provider = provider.name(),
        "generating signal"
    );

    let report = engine
        .generate_report(provider.as_ref(), &symbol, args.strategy.as_str())
        .await;

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    Ok(())
}
