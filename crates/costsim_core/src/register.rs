//! Risk-register boundary.
//!
//! Records arrive from the register with a lifecycle status. Only open risks
//! take part in a simulation, and the requested trial count is bounded here
//! before the engine is invoked. The engine itself applies neither rule.
//!
//! # Examples
//!
//! ```
//! use costsim_core::register::{active_profiles, clamp_trial_count, RiskRecord, RiskStatus};
//! use costsim_core::register::{MAX_TRIALS, MIN_TRIALS};
//!
//! let records = vec![
//!     RiskRecord::new("Open risk", RiskStatus::Open, 50.0, 1.0, 2.0, 3.0),
//!     RiskRecord::new("Mitigated risk", RiskStatus::Mitigated, 50.0, 1.0, 2.0, 3.0),
//! ];
//! let profiles = active_profiles(&records);
//! assert_eq!(profiles[0].title, "Open risk");
//!
//! assert_eq!(clamp_trial_count(5), MIN_TRIALS);
//! assert_eq!(clamp_trial_count(1_000_000), MAX_TRIALS);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::risk::RiskCostProfile;
use crate::types::RegisterError;

/// Smallest trial count the boundary will request.
pub const MIN_TRIALS: usize = 100;

/// Largest trial count the boundary will request.
pub const MAX_TRIALS: usize = 10_000;

/// Trial count used when the caller does not specify one.
pub const DEFAULT_TRIALS: usize = 5_000;

/// Lifecycle status of a register entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskStatus {
    /// Risk is live and contributes to cost exposure.
    #[default]
    Open,
    /// Risk response is in place.
    Mitigated,
    /// Risk no longer applies.
    Closed,
}

impl RiskStatus {
    /// Returns the register label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::Mitigated => "Mitigated",
            RiskStatus::Closed => "Closed",
        }
    }

    /// Returns whether risks with this status participate in simulation.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, RiskStatus::Open)
    }
}

impl FromStr for RiskStatus {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(RiskStatus::Open),
            "mitigated" => Ok(RiskStatus::Mitigated),
            "closed" => Ok(RiskStatus::Closed),
            _ => Err(RegisterError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk as held by the register.
///
/// Field names follow the register's storage columns so records can be
/// deserialised directly from exported CSV or JSON.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskRecord {
    /// Short title of the risk.
    pub title: String,
    /// Lifecycle status.
    pub status: RiskStatus,
    /// Percentage chance of occurrence in [0, 100].
    pub likelihood_percentage: f64,
    /// Best-case cost impact.
    pub optimistic_cost_impact: f64,
    /// Most probable cost impact.
    pub most_likely_cost_impact: f64,
    /// Worst-case cost impact.
    pub pessimistic_cost_impact: f64,
}

impl RiskRecord {
    /// Creates a new register record.
    pub fn new(
        title: impl Into<String>,
        status: RiskStatus,
        likelihood_percentage: f64,
        optimistic_cost_impact: f64,
        most_likely_cost_impact: f64,
        pessimistic_cost_impact: f64,
    ) -> Self {
        Self {
            title: title.into(),
            status,
            likelihood_percentage,
            optimistic_cost_impact,
            most_likely_cost_impact,
            pessimistic_cost_impact,
        }
    }

    /// Converts the record into the engine's input type.
    pub fn cost_profile(&self) -> RiskCostProfile {
        RiskCostProfile::new(
            self.title.clone(),
            self.likelihood_percentage,
            self.optimistic_cost_impact,
            self.most_likely_cost_impact,
            self.pessimistic_cost_impact,
        )
    }
}

/// Filters records to open risks and converts them to cost profiles,
/// preserving register order.
pub fn active_profiles(records: &[RiskRecord]) -> Vec<RiskCostProfile> {
    records
        .iter()
        .filter(|record| record.status.is_active())
        .map(RiskRecord::cost_profile)
        .collect()
}

/// Clamps a requested trial count into `[MIN_TRIALS, MAX_TRIALS]`.
///
/// Negative requests clamp to [`MIN_TRIALS`].
pub fn clamp_trial_count(requested: i64) -> usize {
    let min = MIN_TRIALS as i64;
    let max = MAX_TRIALS as i64;
    requested.clamp(min, max) as usize
}
