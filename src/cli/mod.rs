//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use signal_core::types::{StrategyKind, Timeframe};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Buy/sell/hold signals for exchange price series")]
pub struct Cli {
    /// Configuration file path (defaults and SIGNALS__* variables apply without one)
    #[arg(short, long, env = "SIGNALS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch candles and print a recommendation
    Signal(SignalArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(clap::Args)]
pub struct SignalArgs {
    /// Trading pair (defaults to app.default_symbol)
    #[arg(short = 'S', long)]
    pub symbol: Option<String>,

    /// Strategy to evaluate (turtle, scalping, orb)
    #[arg(short, long, default_value = "orb")]
    pub strategy: StrategyKind,

    /// Read candles from a CSV file instead of the graph API
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Candle resolution (overrides engine.timeframe)
    #[arg(short, long)]
    pub timeframe: Option<Timeframe>,

    /// Number of candles to request (overrides engine.candle_count)
    #[arg(long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
