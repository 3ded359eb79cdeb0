//! Triangular (PERT-style) cost sampler.
//!
//! Draws a cost from the triangular distribution with minimum `optimistic`,
//! mode `most_likely` and maximum `pessimistic` by inverting its CDF.
//!
//! # Algorithm
//!
//! With `u ~ U[0, 1)` and `F(m) = (m - o) / (p - o)`:
//!
//! ```text
//! u <  F(m):  x = o + sqrt(u (p - o)(m - o))
//! u >= F(m):  x = p - sqrt((1 - u)(p - o)(p - m))
//! ```
//!
//! # Draw Accounting
//!
//! A valid call consumes exactly one uniform draw, including the degenerate
//! case `optimistic == pessimistic` where the draw is discarded. An invalid
//! call consumes none. This keeps the stream position of every later risk
//! independent of whether an earlier estimate happened to be degenerate.

use crate::error::SimulationError;
use crate::rng::SimRng;

/// Validated three-point estimate.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::rng::SimRng;
/// use costsim_engine::sampler::TriangularParams;
///
/// let params = TriangularParams::new(100.0, 500.0, 2000.0).unwrap();
/// let mut rng = SimRng::from_seed(42);
/// let cost = params.sample(&mut rng);
/// assert!((100.0..=2000.0).contains(&cost));
/// assert!((params.mean() - 866.666).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularParams {
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
}

impl TriangularParams {
    /// Validates and wraps a three-point estimate.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidDistributionParameters`] unless
    /// `optimistic <= most_likely <= pessimistic` (any NaN bound fails).
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Result<Self, SimulationError> {
        if !(optimistic <= most_likely && most_likely <= pessimistic) {
            return Err(SimulationError::InvalidDistributionParameters {
                optimistic,
                most_likely,
                pessimistic,
            });
        }
        Ok(Self {
            optimistic,
            most_likely,
            pessimistic,
        })
    }

    /// Returns whether the distribution has zero width.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.optimistic == self.pessimistic
    }

    /// Returns the distribution mean `(o + m + p) / 3`.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.optimistic + self.most_likely + self.pessimistic) / 3.0
    }

    /// Draws one cost, consuming exactly one uniform from `rng`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        let u = rng.gen_uniform();
        if self.is_degenerate() {
            return self.most_likely;
        }
        self.inverse_cdf(u)
    }

    /// Maps `u` in [0, 1) to a cost. Requires a non-degenerate distribution.
    ///
    /// The result is clamped to `[optimistic, pessimistic]` to absorb
    /// rounding in the square root.
    #[inline]
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        let (o, m, p) = (self.optimistic, self.most_likely, self.pessimistic);
        let width = p - o;
        let mode_cdf = (m - o) / width;

        let x = if u < mode_cdf {
            o + (u * width * (m - o)).sqrt()
        } else {
            p - ((1.0 - u) * width * (p - m)).sqrt()
        };
        x.clamp(o, p)
    }
}

/// Draws one cost from the triangular distribution `(optimistic, most_likely, pessimistic)`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidDistributionParameters`] when
/// `optimistic > most_likely` or `most_likely > pessimistic`; no draw is
/// consumed in that case.
///
/// # Examples
///
/// ```rust
/// use costsim_engine::rng::SimRng;
/// use costsim_engine::sampler::sample_triangular;
///
/// let mut rng = SimRng::from_seed(1);
/// assert_eq!(sample_triangular(10.0, 10.0, 10.0, &mut rng).unwrap(), 10.0);
/// assert!(sample_triangular(5.0, 1.0, 10.0, &mut rng).is_err());
/// ```
pub fn sample_triangular(
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
    rng: &mut SimRng,
) -> Result<f64, SimulationError> {
    TriangularParams::new(optimistic, most_likely, pessimistic).map(|params| params.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_degenerate_returns_most_likely() {
        let mut rng = SimRng::from_seed(3);
        for _ in 0..100 {
            assert_eq!(sample_triangular(42.0, 42.0, 42.0, &mut rng).unwrap(), 42.0);
        }
    }

    #[test]
    fn test_degenerate_consumes_one_draw() {
        let mut rng = SimRng::from_seed(11);
        let mut reference = SimRng::from_seed(11);

        sample_triangular(5.0, 5.0, 5.0, &mut rng).unwrap();
        reference.gen_uniform();

        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }

    #[test]
    fn test_invalid_parameters_rejected_without_draw() {
        let mut rng = SimRng::from_seed(5);
        let mut reference = SimRng::from_seed(5);

        let err = sample_triangular(10.0, 5.0, 20.0, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidDistributionParameters {
                optimistic: 10.0,
                most_likely: 5.0,
                pessimistic: 20.0,
            }
        );
        assert!(sample_triangular(1.0, 30.0, 20.0, &mut rng).is_err());
        assert!(sample_triangular(f64::NAN, 1.0, 2.0, &mut rng).is_err());

        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }

    #[test]
    fn test_inverse_cdf_endpoints() {
        let params = TriangularParams::new(100.0, 500.0, 2000.0).unwrap();
        assert_eq!(params.inverse_cdf(0.0), 100.0);

        // At the mode CDF the descending branch returns the mode
        let mode_cdf = 400.0 / 1900.0;
        assert_relative_eq!(params.inverse_cdf(mode_cdf), 500.0, epsilon = 1e-9);

        let near_one = params.inverse_cdf(1.0 - 1e-12);
        assert!(near_one <= 2000.0 && near_one > 1999.0);
    }

    #[test]
    fn test_inverse_cdf_ascending_branch_formula() {
        let params = TriangularParams::new(0.0, 10.0, 20.0).unwrap();
        // mode_cdf = 0.5; u = 0.125 -> sqrt(0.125 * 20 * 10) = 5
        assert_relative_eq!(params.inverse_cdf(0.125), 5.0, epsilon = 1e-12);
        // u = 0.875 -> 20 - sqrt(0.125 * 20 * 10) = 15
        assert_relative_eq!(params.inverse_cdf(0.875), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mode_at_minimum_uses_descending_branch() {
        let params = TriangularParams::new(0.0, 0.0, 10.0).unwrap();
        // mode_cdf = 0: every u goes to the descending branch
        assert_relative_eq!(params.inverse_cdf(0.75), 10.0 - (0.25_f64 * 100.0).sqrt());
    }

    #[test]
    fn test_sample_mean_converges() {
        let params = TriangularParams::new(100.0, 500.0, 2000.0).unwrap();
        let mut rng = SimRng::from_seed(42);
        let n = 200_000;
        let mean = (0..n).map(|_| params.sample(&mut rng)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, params.mean(), max_relative = 0.01);
    }

    #[test]
    fn test_matches_reference_triangular_moments() {
        use rand_distr::{Distribution, Triangular};

        let params = TriangularParams::new(2.0, 3.0, 9.0).unwrap();
        let reference = Triangular::new(2.0, 9.0, 3.0).unwrap();

        let n = 100_000;
        let mut rng = SimRng::from_seed(8);
        let ours: f64 = (0..n).map(|_| params.sample(&mut rng)).sum::<f64>() / n as f64;
        let mut rng = SimRng::from_seed(9);
        let theirs: f64 = (0..n).map(|_| reference.sample(&mut rng)).sum::<f64>() / n as f64;

        assert_relative_eq!(ours, theirs, max_relative = 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every draw lies within [optimistic, pessimistic].
        #[test]
        fn prop_sample_within_bounds(
            o in 0.0..1e6f64,
            d1 in 0.0..1e6f64,
            d2 in 0.0..1e6f64,
            seed in any::<u64>(),
        ) {
            let (m, p) = (o + d1, o + d1 + d2);
            let mut rng = SimRng::from_seed(seed);
            for _ in 0..200 {
                let x = sample_triangular(o, m, p, &mut rng).unwrap();
                prop_assert!(x >= o && x <= p, "{} outside [{}, {}]", x, o, p);
            }
        }

        /// Any ordering violation is rejected.
        #[test]
        fn prop_misordered_rejected(a in 0.0..1e6f64, b in 0.0..1e6f64, seed in any::<u64>()) {
            prop_assume!(a > b);
            let mut rng = SimRng::from_seed(seed);
            prop_assert!(sample_triangular(a, b, a + 1.0, &mut rng).is_err());
            prop_assert!(sample_triangular(b, a, b, &mut rng).is_err());
        }
    }
}
