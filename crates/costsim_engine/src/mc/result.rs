//! Simulation result snapshot.

use crate::stats::{histogram, summarize, Histogram, Statistics};

/// Outcome of one simulation run.
///
/// Created fresh by every call to the engine and never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::mc::SimulationRun;
///
/// let run = SimulationRun::empty(1000, 0, 42);
/// assert!(run.is_empty());
/// assert_eq!(run.statistics.mean, 0.0);
/// assert!(run.histogram.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationRun {
    /// Number of trials requested.
    pub trial_count: usize,
    /// Number of risk profiles simulated.
    pub num_active_risks: usize,
    /// Seed that reproduces this run.
    pub seed: u64,
    /// Total cost of each trial, in execution order.
    pub trial_totals: Vec<f64>,
    /// Summary statistics of `trial_totals`.
    pub statistics: Statistics,
    /// Histogram of `trial_totals`.
    pub histogram: Histogram,
    /// Occurrences where a mis-ordered estimate was replaced by its most-likely cost.
    pub fallback_substitutions: usize,
}

impl SimulationRun {
    /// Degenerate result for an empty risk list or zero trials.
    pub fn empty(trial_count: usize, num_active_risks: usize, seed: u64) -> Self {
        Self {
            trial_count,
            num_active_risks,
            seed,
            trial_totals: Vec::new(),
            statistics: Statistics::default(),
            histogram: Histogram::default(),
            fallback_substitutions: 0,
        }
    }

    /// Builds a result from completed trials.
    pub(crate) fn from_batch(
        num_active_risks: usize,
        seed: u64,
        num_bins: usize,
        batch: TrialBatch,
    ) -> Self {
        let statistics = summarize(&batch.totals);
        let histogram = histogram(&batch.totals, num_bins);
        Self {
            trial_count: batch.totals.len(),
            num_active_risks,
            seed,
            trial_totals: batch.totals,
            statistics,
            histogram,
            fallback_substitutions: batch.fallback_substitutions,
        }
    }

    /// Returns whether no trials were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trial_totals.is_empty()
    }
}

/// Totals from a contiguous block of trials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrialBatch {
    /// Per-trial totals in execution order.
    pub totals: Vec<f64>,
    /// Fallback substitutions made while producing `totals`.
    pub fallback_substitutions: usize,
}

impl TrialBatch {
    /// Creates an empty batch with room for `capacity` trials.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            totals: Vec::with_capacity(capacity),
            fallback_substitutions: 0,
        }
    }

    /// Concatenates batches in the given order.
    pub fn concat(batches: Vec<TrialBatch>) -> Self {
        let len = batches.iter().map(|b| b.totals.len()).sum();
        batches
            .into_iter()
            .fold(Self::with_capacity(len), |mut acc, batch| {
                acc.totals.extend(batch.totals);
                acc.fallback_substitutions += batch.fallback_substitutions;
                acc
            })
    }
}
