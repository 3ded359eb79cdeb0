//! Cost profiles consumed by the simulation engine.

/// Occurrence probability and three-point cost estimate for a single risk.
///
/// Profiles are immutable inputs to a simulation run. The cost ordering
/// `optimistic <= most_likely <= pessimistic` is expected but not enforced
/// here: the engine tolerates a mis-ordered profile by substituting its
/// most-likely cost, so construction never fails.
///
/// # Examples
///
/// ```
/// use costsim_core::risk::RiskCostProfile;
///
/// let profile = RiskCostProfile::new("Vendor lock-in", 25.0, 100.0, 500.0, 2000.0);
/// assert!(profile.is_well_ordered());
/// assert!((profile.occurrence_rate() - 0.25).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskCostProfile {
    /// Identifying label, carried for traceability only.
    pub title: String,
    /// Percentage chance in [0, 100] that the risk materialises in a trial.
    pub occurrence_probability: f64,
    /// Best-case cost impact.
    pub optimistic_cost: f64,
    /// Most probable cost impact (mode of the triangular distribution).
    pub most_likely_cost: f64,
    /// Worst-case cost impact.
    pub pessimistic_cost: f64,
}

impl RiskCostProfile {
    /// Creates a new profile.
    pub fn new(
        title: impl Into<String>,
        occurrence_probability: f64,
        optimistic_cost: f64,
        most_likely_cost: f64,
        pessimistic_cost: f64,
    ) -> Self {
        Self {
            title: title.into(),
            occurrence_probability,
            optimistic_cost,
            most_likely_cost,
            pessimistic_cost,
        }
    }

    /// Returns the occurrence probability as a fraction in [0, 1].
    #[inline]
    pub fn occurrence_rate(&self) -> f64 {
        self.occurrence_probability / 100.0
    }

    /// Returns whether `optimistic <= most_likely <= pessimistic` holds.
    #[inline]
    pub fn is_well_ordered(&self) -> bool {
        self.optimistic_cost <= self.most_likely_cost
            && self.most_likely_cost <= self.pessimistic_cost
    }

    /// Returns the expected cost contribution per trial:
    /// `rate * (optimistic + most_likely + pessimistic) / 3`.
    ///
    /// Only meaningful for well-ordered profiles.
    pub fn expected_cost(&self) -> f64 {
        self.occurrence_rate()
            * (self.optimistic_cost + self.most_likely_cost + self.pessimistic_cost)
            / 3.0
    }
}
