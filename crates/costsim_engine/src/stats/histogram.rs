//! Equal-width histogram of trial totals for visualisation.

/// Bin labels and counts.
///
/// `bin_midpoints[i]` labels the bin whose count is `frequencies[i]`.
/// Frequencies are raw counts, not densities.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Interval midpoints rounded to 2 decimal places.
    pub bin_midpoints: Vec<f64>,
    /// Number of totals falling in each interval.
    pub frequencies: Vec<usize>,
}

impl Histogram {
    /// Returns the number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns whether the histogram has no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Returns the total number of observations.
    pub fn total_count(&self) -> usize {
        self.frequencies.iter().sum()
    }

    /// Iterates over `(midpoint, frequency)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.bin_midpoints
            .iter()
            .copied()
            .zip(self.frequencies.iter().copied())
    }
}

/// Bins `values` into `num_bins` equal-width intervals over `[min, max]`.
///
/// - Empty input, or `num_bins == 0`, yields an empty histogram.
/// - If every value is identical, a single bin labelled with that value holds
///   all observations.
/// - Otherwise value `v` lands in bin `floor((v - min) / width)`, clamped to
///   the last bin so that `max` is counted.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::stats::histogram;
///
/// let h = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(h.bin_midpoints, vec![1.0, 3.0]);
/// assert_eq!(h.frequencies, vec![2, 3]);
///
/// let flat = histogram(&[5.0, 5.0, 5.0], 20);
/// assert_eq!(flat.bin_midpoints, vec![5.0]);
/// assert_eq!(flat.frequencies, vec![3]);
/// ```
pub fn histogram(values: &[f64], num_bins: usize) -> Histogram {
    if values.is_empty() || num_bins == 0 {
        return Histogram::default();
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min == max {
        return Histogram {
            bin_midpoints: vec![min],
            frequencies: vec![values.len()],
        };
    }

    let width = (max - min) / num_bins as f64;
    let last = num_bins - 1;

    let mut frequencies = vec![0usize; num_bins];
    for &value in values {
        let index = ((value - min) / width).floor() as usize;
        frequencies[index.min(last)] += 1;
    }

    let bin_midpoints = (0..num_bins)
        .map(|i| {
            let lower = min + i as f64 * width;
            let upper = min + (i + 1) as f64 * width;
            round_to_cents((lower + upper) / 2.0)
        })
        .collect();

    Histogram {
        bin_midpoints,
        frequencies,
    }
}

/// Rounds half to even at two decimals.
#[inline]
fn round_to_cents(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        let h = histogram(&[], 20);
        assert!(h.is_empty());
        assert_eq!(h.total_count(), 0);
    }

    #[test]
    fn test_zero_bins() {
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_all_equal_single_bin() {
        let h = histogram(&[10.0; 250], 20);
        assert_eq!(h.len(), 1);
        assert_eq!(h.bin_midpoints, vec![10.0]);
        assert_eq!(h.frequencies, vec![250]);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let values: Vec<f64> = (0..=20).map(f64::from).collect();
        let h = histogram(&values, 20);
        assert_eq!(h.len(), 20);
        // 19.0 and 20.0 share the last bin
        assert_eq!(h.frequencies[19], 2);
        assert_eq!(h.frequencies[0], 1);
        assert_eq!(h.total_count(), 21);
    }

    #[test]
    fn test_midpoints_rounded() {
        let h = histogram(&[0.0, 1.0], 3);
        assert_eq!(h.bin_midpoints, vec![0.17, 0.5, 0.83]);
        assert_eq!(h.frequencies, vec![1, 0, 1]);
    }

    #[test]
    fn test_midpoint_ties_round_to_even() {
        let h = histogram(&[0.0, 1.0], 4);
        assert_eq!(h.bin_midpoints, vec![0.12, 0.38, 0.62, 0.88]);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_iter_pairs() {
        let h = histogram(&[0.0, 10.0], 2);
        let pairs: Vec<(f64, usize)> = h.iter().collect();
        assert_eq!(pairs, vec![(2.5, 1), (7.5, 1)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Frequencies sum to the number of observations.
        #[test]
        fn prop_counts_sum_to_len(
            values in prop::collection::vec(0.0..1e6f64, 1..400),
            num_bins in 1..50usize,
        ) {
            let h = histogram(&values, num_bins);
            prop_assert_eq!(h.total_count(), values.len());
            prop_assert_eq!(h.bin_midpoints.len(), h.frequencies.len());
            prop_assert!(h.len() == num_bins || h.len() == 1);
        }
    }
}
