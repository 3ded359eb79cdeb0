//! costsim CLI - Monte Carlo cost-risk simulation
//!
//! # Commands
//!
//! - `costsim simulate --input <file>` - Simulate the open risks of a register
//! - `costsim check` - Print the effective configuration
//!
//! # Architecture
//!
//! The service layer of the workspace: loads configuration and risk
//! registers, drives `costsim_engine` and renders results.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use costsim_core::Currency;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides, LogLevel};
use output::OutputFormat;

/// Monte Carlo cost-risk simulator
#[derive(Parser)]
#[command(name = "costsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./costsim.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the open risks of a risk register
    Simulate {
        /// Path to risk register file (CSV/JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of trials, clamped to [100, 10000]
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        trials: Option<i64>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of histogram bins
        #[arg(short, long)]
        bins: Option<usize>,

        /// Run trials in parallel
        #[arg(short, long, conflicts_with = "sequential")]
        parallel: bool,

        /// Run trials sequentially, overriding config and environment
        #[arg(long)]
        sequential: bool,

        /// Trials per parallel partition
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Currency for table output (USD, GBP, EUR, INR)
        #[arg(long)]
        currency: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration and runtime environment
    Check,
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.verbose.then_some(LogLevel::Debug),
        ..Default::default()
    };

    if let Commands::Simulate {
        trials,
        bins,
        parallel,
        sequential,
        chunk_size,
        currency,
        ..
    } = &cli.command
    {
        overrides.trials = *trials;
        overrides.num_bins = *bins;
        overrides.parallel = match (*parallel, *sequential) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        overrides.chunk_size = *chunk_size;
        overrides.currency = currency
            .as_deref()
            .map(Currency::from_str)
            .transpose()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    }

    let config = build_config(&overrides)?;
    init_tracing(config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate {
            input, seed, format, ..
        } => {
            let format = OutputFormat::from_str(&format)?;
            commands::simulate::run(&input, seed, format, &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}
