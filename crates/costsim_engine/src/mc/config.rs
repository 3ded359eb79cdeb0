//! Simulation configuration.
//!
//! This module provides configuration types and builders for cost-risk
//! simulations.

use crate::error::SimulationError;

/// Default number of histogram bins.
pub const DEFAULT_NUM_BINS: usize = 20;

/// Default number of trials per parallel partition.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// How trials are scheduled.
///
/// - `Sequential`: one generator drives every trial in order
/// - `Parallel`: trials are split into fixed-size chunks, each with its own
///   sub-stream, executed on the rayon pool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded, single random stream.
    #[default]
    Sequential,

    /// Partitioned across rayon workers.
    Parallel {
        /// Trials per partition. Results depend on this value, not on the
        /// number of worker threads.
        chunk_size: usize,
    },
}

impl ExecutionMode {
    /// Parallel execution with [`DEFAULT_CHUNK_SIZE`].
    #[inline]
    pub fn parallel() -> Self {
        ExecutionMode::Parallel {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Simulation configuration.
///
/// Immutable; use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::mc::{ExecutionMode, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .trial_count(5_000)
///     .seed(42)
///     .execution(ExecutionMode::parallel())
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.trial_count(), 5_000);
/// assert_eq!(config.num_bins(), 20);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    trial_count: usize,
    seed: Option<u64>,
    num_bins: usize,
    execution: ExecutionMode,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Returns the optional seed. `None` draws a fresh seed per run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of histogram bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Validates the configuration.
    ///
    /// Any trial count is accepted, including zero; bounding the count is
    /// the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSimulationParameters`] if:
    /// - `num_bins` is 0
    /// - parallel `chunk_size` is 0
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_bins == 0 {
            return Err(SimulationError::invalid_parameter(
                "num_bins",
                "must be at least 1",
            ));
        }
        if let ExecutionMode::Parallel { chunk_size: 0 } = self.execution {
            return Err(SimulationError::invalid_parameter(
                "chunk_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    trial_count: Option<usize>,
    seed: Option<u64>,
    num_bins: Option<usize>,
    execution: ExecutionMode,
}

impl SimulationConfigBuilder {
    /// Sets the number of trials.
    #[inline]
    pub fn trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = Some(trial_count);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` clears any previously set seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of histogram bins (default 20).
    #[inline]
    pub fn num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = Some(num_bins);
        self
    }

    /// Sets the execution mode (default sequential).
    #[inline]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSimulationParameters`] if
    /// `trial_count` was not set or the configuration fails
    /// [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let trial_count = self
            .trial_count
            .ok_or_else(|| SimulationError::invalid_parameter("trial_count", "must be specified"))?;

        let config = SimulationConfig {
            trial_count,
            seed: self.seed,
            num_bins: self.num_bins.unwrap_or(DEFAULT_NUM_BINS),
            execution: self.execution,
        };

        config.validate()?;
        Ok(config)
    }
}
