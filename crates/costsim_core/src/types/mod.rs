//! Currency and error types.
//!
//! This module provides:
//! - `currency`: Currencies offered by the risk register, with display symbols
//! - `error`: Structured error types for currency and register parsing
//!
//! # Re-exports
//!
//! - [`Currency`] from `currency`
//! - [`CurrencyError`], [`RegisterError`] from `error`

pub mod currency;
pub mod error;

pub use currency::Currency;
pub use error::{CurrencyError, RegisterError};
