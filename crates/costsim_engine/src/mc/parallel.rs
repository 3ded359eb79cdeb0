//! Rayon-partitioned trial execution.
//!
//! Trials are split into consecutive chunks of `chunk_size`. Chunk `k` runs
//! on its own sub-stream `SimRng::for_stream(seed, k)`, and chunk outputs
//! are concatenated in chunk order. The result therefore depends on
//! `(seed, chunk_size)` only, not on how many worker threads rayon uses.
//!
//! Partitioned runs do not reproduce the sequential stream for the same
//! seed; the two modes are separately reproducible.

use costsim_core::RiskCostProfile;
use rayon::prelude::*;

use super::engine::run_trials;
use super::result::TrialBatch;
use crate::rng::SimRng;

/// Number of chunks needed to cover `trial_count` trials.
#[inline]
pub fn chunk_count(trial_count: usize, chunk_size: usize) -> usize {
    trial_count.div_ceil(chunk_size.max(1))
}

/// Runs `trial_count` trials across the rayon pool.
///
/// A `chunk_size` of 0 is treated as 1.
pub fn run_partitioned(
    profiles: &[RiskCostProfile],
    trial_count: usize,
    seed: u64,
    chunk_size: usize,
) -> TrialBatch {
    let chunk_size = chunk_size.max(1);
    let batches: Vec<TrialBatch> = (0..chunk_count(trial_count, chunk_size))
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * chunk_size;
            let len = chunk_size.min(trial_count - start);
            let mut rng = SimRng::for_stream(seed, chunk as u64);
            run_trials(profiles, len, &mut rng)
        })
        .collect();

    TrialBatch::concat(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risks() -> Vec<RiskCostProfile> {
        vec![
            RiskCostProfile::new("a", 30.0, 100.0, 400.0, 900.0),
            RiskCostProfile::new("b", 75.0, 10.0, 20.0, 80.0),
        ]
    }

    #[test]
    fn test_chunk_count() {
        assert_eq!(chunk_count(0, 10), 0);
        assert_eq!(chunk_count(10, 10), 1);
        assert_eq!(chunk_count(11, 10), 2);
        assert_eq!(chunk_count(5, 0), 5);
    }

    #[test]
    fn test_partitioned_length() {
        let batch = run_partitioned(&risks(), 1001, 7, 100);
        assert_eq!(batch.totals.len(), 1001);
    }

    #[test]
    fn test_partitioned_matches_manual_chunks() {
        let profiles = risks();
        let batch = run_partitioned(&profiles, 250, 11, 100);

        let mut expected = Vec::new();
        for (chunk, len) in [(0u64, 100usize), (1, 100), (2, 50)] {
            let mut rng = SimRng::for_stream(11, chunk);
            expected.extend(run_trials(&profiles, len, &mut rng).totals);
        }
        assert_eq!(batch.totals, expected);
    }

    #[test]
    fn test_partitioned_independent_of_thread_count() {
        let profiles = risks();
        let run_in = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| run_partitioned(&profiles, 3000, 123, 64))
        };

        let single = run_in(1);
        let many = run_in(4);
        assert_eq!(single, many);
    }
}
