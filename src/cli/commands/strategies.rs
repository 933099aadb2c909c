//! List strategies command.

use anyhow::Result;
use signal_strategies::StrategyRegistry;

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        println!("  {} ({})", info.name, info.key);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Defaults: {}", info.default_config);
        println!();
    }

    println!("Use --strategy <name> to select a strategy.");
    println!("Unknown names passed to the engine fall back to orb.");

    Ok(())
}
