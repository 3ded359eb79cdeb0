//! Cost simulation engine.
//!
//! # Overview
//!
//! For each trial the engine walks the risk profiles in input order:
//! 1. Draw `u`; the risk occurs if `u < occurrence_probability / 100`
//! 2. If it occurs, draw its cost from the triangular sampler
//! 3. Add the cost to the trial total
//!
//! A profile whose estimate is mis-ordered does not abort the run: its
//! most-likely cost is used for that occurrence and the substitution is
//! counted on the result.

use costsim_core::RiskCostProfile;
use tracing::{debug, trace, warn};

use super::config::{ExecutionMode, SimulationConfig};
use super::parallel::run_partitioned;
use super::result::{SimulationRun, TrialBatch};
use crate::error::SimulationError;
use crate::rng::SimRng;
use crate::sampler::sample_triangular;

/// Monte Carlo cost-risk simulator.
///
/// Holds only configuration; every run starts from a fresh generator, so
/// separate runs never share random state.
///
/// # Examples
///
/// ```rust
/// use costsim_core::RiskCostProfile;
/// use costsim_engine::mc::{CostSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .trial_count(5_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let simulator = CostSimulator::new(config).unwrap();
///
/// let risks = vec![
///     RiskCostProfile::new("Design rework", 100.0, 100.0, 500.0, 2000.0),
/// ];
/// let run = simulator.run(&risks).unwrap();
///
/// assert_eq!(run.trial_totals.len(), 5_000);
/// assert!(run.statistics.min >= 100.0);
/// assert!(run.statistics.max <= 2000.0);
/// ```
#[derive(Clone, Debug)]
pub struct CostSimulator {
    config: SimulationConfig,
}

impl CostSimulator {
    /// Creates a simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSimulationParameters`] if the
    /// configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation using the configured seed and execution mode.
    ///
    /// Without a configured seed, a fresh one is drawn and reported on the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSimulationParameters`] before any
    /// trial runs if a profile has a non-finite value, a probability outside
    /// [0, 100], or a negative cost.
    pub fn run(&self, profiles: &[RiskCostProfile]) -> Result<SimulationRun, SimulationError> {
        let seed = self
            .config
            .seed()
            .unwrap_or_else(|| SimRng::from_entropy().seed());

        match self.config.execution() {
            ExecutionMode::Sequential => {
                let mut rng = SimRng::from_seed(seed);
                self.run_with_rng(profiles, &mut rng)
            }
            ExecutionMode::Parallel { chunk_size } => {
                validate_profiles(profiles)?;
                let trial_count = self.config.trial_count();
                if profiles.is_empty() || trial_count == 0 {
                    return Ok(SimulationRun::empty(trial_count, profiles.len(), seed));
                }

                debug!(
                    trial_count,
                    risks = profiles.len(),
                    seed,
                    chunk_size,
                    "starting partitioned simulation"
                );
                let batch = run_partitioned(profiles, trial_count, seed, chunk_size);
                Ok(self.finish(profiles, seed, batch))
            }
        }
    }

    /// Runs all trials sequentially on the caller's generator.
    ///
    /// The configured seed and execution mode are ignored; the reported seed
    /// is `rng.seed()`. Useful for replaying a run on an injected stream.
    ///
    /// # Errors
    ///
    /// Same as [`CostSimulator::run`].
    pub fn run_with_rng(
        &self,
        profiles: &[RiskCostProfile],
        rng: &mut SimRng,
    ) -> Result<SimulationRun, SimulationError> {
        validate_profiles(profiles)?;
        let trial_count = self.config.trial_count();
        if profiles.is_empty() || trial_count == 0 {
            return Ok(SimulationRun::empty(trial_count, profiles.len(), rng.seed()));
        }

        debug!(
            trial_count,
            risks = profiles.len(),
            seed = rng.seed(),
            "starting sequential simulation"
        );
        let batch = run_trials(profiles, trial_count, rng);
        Ok(self.finish(profiles, rng.seed(), batch))
    }

    fn finish(&self, profiles: &[RiskCostProfile], seed: u64, batch: TrialBatch) -> SimulationRun {
        if batch.fallback_substitutions > 0 {
            let misordered: Vec<&str> = profiles
                .iter()
                .filter(|p| !p.is_well_ordered())
                .map(|p| p.title.as_str())
                .collect();
            warn!(
                substitutions = batch.fallback_substitutions,
                risks = ?misordered,
                "mis-ordered cost estimates replaced by most-likely cost"
            );
        }
        let run = SimulationRun::from_batch(profiles.len(), seed, self.config.num_bins(), batch);
        debug!(
            trials = run.trial_count,
            mean = run.statistics.mean,
            p90 = run.statistics.p90,
            "simulation complete"
        );
        run
    }
}

/// Runs `trial_count` trials on `rng`.
pub fn run_trials(profiles: &[RiskCostProfile], trial_count: usize, rng: &mut SimRng) -> TrialBatch {
    let mut batch = TrialBatch::with_capacity(trial_count);
    for _ in 0..trial_count {
        let total = simulate_trial(profiles, rng, &mut batch.fallback_substitutions);
        batch.totals.push(total);
    }
    batch
}

/// Resolves one trial and returns its total cost.
///
/// `fallbacks` is incremented once per occurring risk whose estimate the
/// sampler rejected.
pub fn simulate_trial(
    profiles: &[RiskCostProfile],
    rng: &mut SimRng,
    fallbacks: &mut usize,
) -> f64 {
    let mut total = 0.0;
    for profile in profiles {
        if rng.gen_uniform() >= profile.occurrence_rate() {
            continue;
        }
        total += match sample_triangular(
            profile.optimistic_cost,
            profile.most_likely_cost,
            profile.pessimistic_cost,
            rng,
        ) {
            Ok(cost) => cost,
            Err(err) => {
                trace!(risk = %profile.title, %err, "using most-likely cost");
                *fallbacks += 1;
                profile.most_likely_cost
            }
        };
    }
    total
}

/// Rejects profiles that would silently corrupt the output.
pub fn validate_profiles(profiles: &[RiskCostProfile]) -> Result<(), SimulationError> {
    for (index, profile) in profiles.iter().enumerate() {
        let probability = profile.occurrence_probability;
        if !probability.is_finite() || !(0.0..=100.0).contains(&probability) {
            return Err(SimulationError::invalid_parameter(
                "occurrence_probability",
                format!(
                    "risk #{} '{}' has probability {} outside [0, 100]",
                    index, profile.title, probability
                ),
            ));
        }

        let costs = [
            ("optimistic_cost", profile.optimistic_cost),
            ("most_likely_cost", profile.most_likely_cost),
            ("pessimistic_cost", profile.pessimistic_cost),
        ];
        for (name, cost) in costs {
            if !cost.is_finite() || cost < 0.0 {
                return Err(SimulationError::invalid_parameter(
                    name,
                    format!(
                        "risk #{} '{}' has cost {}; costs must be finite and non-negative",
                        index, profile.title, cost
                    ),
                ));
            }
        }
    }
    Ok(())
}
