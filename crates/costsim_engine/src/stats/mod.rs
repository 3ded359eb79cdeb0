//! Descriptive statistics over trial totals.
//!
//! Percentiles use the nearest-rank rule on the ascending sort: percentile
//! `p` is the element at index `floor(p * n)`. No interpolation is applied,
//! so every reported percentile is an observed trial total.

mod histogram;

pub use histogram::{histogram, Histogram};

/// Summary statistics of a simulation's trial totals.
///
/// All fields are zero for an empty input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (mean of the two middle values for an even count).
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for fewer than 2 values.
    pub std_dev: f64,
    /// Smallest total.
    pub min: f64,
    /// Largest total.
    pub max: f64,
    /// 10th percentile (nearest rank).
    pub p10: f64,
    /// 25th percentile (nearest rank).
    pub p25: f64,
    /// 75th percentile (nearest rank).
    pub p75: f64,
    /// 90th percentile (nearest rank).
    pub p90: f64,
    /// 95th percentile (nearest rank).
    pub p95: f64,
}

impl Statistics {
    /// Returns the percentile ladder `[p10, p25, median, p75, p90, p95]`.
    pub fn ladder(&self) -> [f64; 6] {
        [self.p10, self.p25, self.median, self.p75, self.p90, self.p95]
    }
}

/// Computes summary statistics for `trial_totals`.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::stats::summarize;
///
/// let stats = summarize(&[4.0, 1.0, 3.0, 2.0]);
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.median, 2.5);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 4.0);
/// // floor(0.25 * 4) = 1 -> second smallest
/// assert_eq!(stats.p25, 2.0);
/// ```
pub fn summarize(trial_totals: &[f64]) -> Statistics {
    let n = trial_totals.len();
    if n == 0 {
        return Statistics::default();
    }

    let mut sorted = trial_totals.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mean = trial_totals.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        let sum_sq: f64 = trial_totals.iter().map(|&x| (x - mean).powi(2)).sum();
        (sum_sq / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    Statistics {
        mean,
        median: median_of_sorted(&sorted),
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        p10: percentile(&sorted, 0.10),
        p25: percentile(&sorted, 0.25),
        p75: percentile(&sorted, 0.75),
        p90: percentile(&sorted, 0.90),
        p95: percentile(&sorted, 0.95),
    }
}

/// Nearest-rank percentile of an ascending slice: element at `floor(p * n)`,
/// clamped to the last index. Returns 0 for an empty slice.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::stats::percentile;
///
/// let sorted: Vec<f64> = (0..10).map(f64::from).collect();
/// assert_eq!(percentile(&sorted, 0.10), 1.0);
/// assert_eq!(percentile(&sorted, 0.95), 9.0);
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p * sorted.len() as f64).floor() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(summarize(&[]), Statistics::default());
        assert_eq!(Statistics::default().ladder(), [0.0; 6]);
    }

    #[test]
    fn test_single_value() {
        let stats = summarize(&[7.5]);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.ladder(), [7.5; 6]);
    }

    #[test]
    fn test_sample_std_dev() {
        // Sample variance of 2,4,4,4,5,5,7,9 is 32/7
        let stats = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(stats.mean, 5.0);
        assert_relative_eq!(stats.std_dev, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(summarize(&[3.0, 1.0, 2.0]).median, 2.0);
        assert_eq!(summarize(&[10.0, 1.0, 3.0, 2.0]).median, 2.5);
    }

    #[test]
    fn test_nearest_rank_indices() {
        // 0..100 sorted: value equals its index
        let values: Vec<f64> = (0..100).rev().map(f64::from).collect();
        let stats = summarize(&values);
        assert_eq!(stats.p10, 10.0);
        assert_eq!(stats.p25, 25.0);
        assert_eq!(stats.p75, 75.0);
        assert_eq!(stats.p90, 90.0);
        assert_eq!(stats.p95, 95.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 99.0);
    }

    #[test]
    fn test_nearest_rank_small_sample() {
        // n = 7: indices floor(0.7)=0, floor(1.75)=1, floor(5.25)=5, floor(6.3)=6, floor(6.65)=6
        let values = [70.0, 10.0, 30.0, 50.0, 20.0, 60.0, 40.0];
        let stats = summarize(&values);
        assert_eq!(stats.p10, 10.0);
        assert_eq!(stats.p25, 20.0);
        assert_eq!(stats.p75, 60.0);
        assert_eq!(stats.p90, 70.0);
        assert_eq!(stats.p95, 70.0);
    }

    #[test]
    fn test_percentile_clamps_rank() {
        assert_eq!(percentile(&[1.0, 2.0], 1.0), 2.0);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// p10 <= p25 <= median <= p75 <= p90 <= p95, all within [min, max].
        #[test]
        fn prop_percentile_ordering(values in prop::collection::vec(0.0..1e7f64, 1..500)) {
            let stats = summarize(&values);
            let ladder = stats.ladder();
            for pair in ladder.windows(2) {
                prop_assert!(pair[0] <= pair[1], "ladder not monotone: {:?}", ladder);
            }
            prop_assert!(stats.min <= stats.p10);
            prop_assert!(stats.p95 <= stats.max);
            prop_assert!(stats.mean >= stats.min * (1.0 - 1e-12));
            prop_assert!(stats.mean <= stats.max * (1.0 + 1e-12));
        }
    }
}
