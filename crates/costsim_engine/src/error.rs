//! Error types for the simulation engine.
//!
//! Two failure modes exist:
//! - the sampler rejects a mis-ordered three-point estimate, which the engine
//!   absorbs per risk by substituting the most-likely cost;
//! - the engine rejects invalid top-level parameters before any trial runs.

use thiserror::Error;

/// Simulation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Three-point estimate violates `optimistic <= most_likely <= pessimistic`.
    #[error(
        "Invalid distribution parameters: optimistic={optimistic}, most_likely={most_likely}, \
         pessimistic={pessimistic} (expected optimistic <= most_likely <= pessimistic)"
    )]
    InvalidDistributionParameters {
        /// Optimistic (minimum) bound.
        optimistic: f64,
        /// Most-likely value (mode).
        most_likely: f64,
        /// Pessimistic (maximum) bound.
        pessimistic: f64,
    },

    /// Top-level simulation input or configuration is invalid.
    #[error("Invalid simulation parameter '{name}': {reason}")]
    InvalidSimulationParameters {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl SimulationError {
    /// Shorthand for [`SimulationError::InvalidSimulationParameters`].
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSimulationParameters {
            name,
            reason: reason.into(),
        }
    }
}
