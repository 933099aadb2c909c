//! CLI command implementations.

pub mod default_config;
pub mod signal;
pub mod strategies;
pub mod validate;
