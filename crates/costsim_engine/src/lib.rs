//! # costsim_engine (Layer 2: Simulation Kernel)
//!
//! Monte Carlo estimation of total project risk cost. Each open risk carries
//! an occurrence probability and a three-point cost estimate; every trial
//! decides which risks occur, samples their costs from a triangular
//! distribution and sums them. The distribution of trial totals is then
//! summarised and binned.
//!
//! ## Modules
//!
//! - [`rng`]: `SimRng`, the explicit seeded random source and its sub-streams
//! - [`sampler`]: triangular inverse-CDF sampler
//! - [`mc`]: configuration, trial loop, partitioned parallel execution, results
//! - [`stats`]: summary statistics (nearest-rank percentiles) and histogram
//!
//! ## Reproducibility
//!
//! A run is a pure function of its inputs, its seed and its execution mode.
//! Sequential runs consume a single stream in trial-then-risk order;
//! partitioned runs give each chunk of trials its own sub-stream, so their
//! output does not depend on the rayon thread count.
//!
//! ## Usage Example
//!
//! ```rust
//! use costsim_core::RiskCostProfile;
//! use costsim_engine::{CostSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .trial_count(1_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let simulator = CostSimulator::new(config).unwrap();
//!
//! let risks = vec![RiskCostProfile::new("Certain fee", 100.0, 10.0, 10.0, 10.0)];
//! let run = simulator.run(&risks).unwrap();
//! assert!(run.trial_totals.iter().all(|&t| t == 10.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `SimulationRun`, `Statistics` and `Histogram`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod mc;
pub mod rng;
pub mod sampler;
pub mod stats;

pub use error::SimulationError;
pub use mc::{CostSimulator, ExecutionMode, SimulationConfig, SimulationRun};
pub use rng::SimRng;
pub use sampler::{sample_triangular, TriangularParams};
pub use stats::{histogram, summarize, Histogram, Statistics};
