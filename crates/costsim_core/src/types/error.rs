//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency parsing
//! - `RegisterError`: Errors from risk-register record parsing

use std::fmt;
use thiserror::Error;

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Currency code not offered by the register
///
/// # Examples
/// ```
/// use costsim_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    UnknownCurrency(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Risk-register errors raised at the boundary.
///
/// # Examples
/// ```
/// use costsim_core::types::RegisterError;
///
/// let err = RegisterError::UnknownStatus("Pending".to_string());
/// assert!(format!("{}", err).contains("Pending"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Status string is not one of Open, Mitigated, Closed.
    #[error("Unknown risk status: {0}. Must be one of: Open, Mitigated, Closed")]
    UnknownStatus(String),
}
