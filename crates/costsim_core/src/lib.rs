//! # costsim_core: Domain Foundation for Cost-Risk Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! costsim_core is the bottom layer of the workspace, providing:
//! - Cost profiles consumed by the simulation engine (`risk`)
//! - The risk-register boundary: status filtering and trial-count bounds (`register`)
//! - Currency types: `Currency` (`types::currency`)
//! - Presentation helpers: `format_currency` (`format`)
//! - Error types: `CurrencyError`, `RegisterError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other costsim_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use costsim_core::format::format_currency;
//! use costsim_core::register::{active_profiles, RiskRecord, RiskStatus};
//! use costsim_core::types::Currency;
//!
//! let records = vec![
//!     RiskRecord::new("Supplier delay", RiskStatus::Open, 40.0, 1_000.0, 2_500.0, 8_000.0),
//!     RiskRecord::new("Legacy API", RiskStatus::Closed, 90.0, 500.0, 700.0, 900.0),
//! ];
//!
//! // Only open risks cross the boundary into the engine
//! let profiles = active_profiles(&records);
//! assert_eq!(profiles.len(), 1);
//!
//! assert_eq!(format_currency(1234.56, Currency::USD), "$1,234.56");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Currency`, `RiskCostProfile`, `RiskRecord` and `RiskStatus`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod format;
pub mod register;
pub mod risk;
pub mod types;

pub use format::format_currency;
pub use register::{active_profiles, clamp_trial_count, RiskRecord, RiskStatus};
pub use risk::RiskCostProfile;
pub use types::{Currency, CurrencyError, RegisterError};
