//! Check command implementation
//!
//! Prints the effective configuration and runtime environment.

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    println!("costsim {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Effective configuration:");
    println!("  trials:      {}", config.trials);
    println!("  currency:    {} ({})", config.currency, config.currency.symbol());
    println!("  num_bins:    {}", config.num_bins);
    println!("  parallel:    {}", config.parallel);
    println!("  chunk_size:  {}", config.chunk_size);
    println!("  log_level:   {}", config.log_level);
    println!();
    println!("Runtime:");
    println!("  rayon threads: {}", rayon::current_num_threads());

    info!("Check complete");
    Ok(())
}
