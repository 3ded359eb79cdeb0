//! Simulate command implementation
//!
//! Loads a risk register, runs the Monte Carlo simulation over its open
//! risks and renders the result.

use std::io::Write;
use std::path::Path;

use costsim_core::{active_profiles, clamp_trial_count};
use costsim_engine::{CostSimulator, ExecutionMode, SimulationConfig, SimulationRun};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::load_records;
use crate::output::{render, OutputFormat};
use crate::Result;

/// Run the simulate command
pub fn run(input: &Path, seed: Option<u64>, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let sim_run = simulate(input, seed, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &sim_run, format, config.currency)?;
    out.flush()?;
    Ok(())
}

/// Load `input` and simulate it with the effective configuration
pub fn simulate(input: &Path, seed: Option<u64>, config: &CliConfig) -> Result<SimulationRun> {
    info!("Running simulation...");
    info!("  Input: {}", input.display());

    let records = load_records(input)?;
    let profiles = active_profiles(&records);
    info!(
        "  Risks: {} loaded, {} open",
        records.len(),
        profiles.len()
    );

    let trial_count = clamp_trial_count(config.trials);
    if trial_count as i64 != config.trials {
        warn!(
            requested = config.trials,
            used = trial_count,
            "Trial count out of range, clamped"
        );
    }

    let execution = if config.parallel {
        ExecutionMode::Parallel {
            chunk_size: config.chunk_size,
        }
    } else {
        ExecutionMode::Sequential
    };

    let sim_config = SimulationConfig::builder()
        .trial_count(trial_count)
        .maybe_seed(seed)
        .num_bins(config.num_bins)
        .execution(execution)
        .build()?;

    let sim_run = CostSimulator::new(sim_config)?.run(&profiles)?;
    info!("Simulation complete (seed {})", sim_run.seed);
    Ok(sim_run)
}
