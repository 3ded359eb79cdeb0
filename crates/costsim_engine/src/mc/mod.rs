//! Monte Carlo cost-risk simulation.
//!
//! # Architecture
//!
//! ```text
//! CostSimulator
//! ├── SimulationConfig  (trial count, seed, bins, execution mode)
//! ├── SimRng            (explicit random source, one per run or partition)
//! └── Orchestration
//!     ├── simulate_trial()   occurrence draw + triangular cost per risk
//!     ├── run_trials()       sequential trial loop
//!     ├── run_partitioned()  rayon chunks with sub-streams
//!     └── summarize() / histogram()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use costsim_core::RiskCostProfile;
//! use costsim_engine::mc::{CostSimulator, ExecutionMode, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .trial_count(10_000)
//!     .seed(2024)
//!     .execution(ExecutionMode::parallel())
//!     .build()
//!     .unwrap();
//!
//! let risks = vec![
//!     RiskCostProfile::new("Supplier insolvency", 15.0, 20_000.0, 45_000.0, 120_000.0),
//!     RiskCostProfile::new("Scope creep", 60.0, 5_000.0, 12_000.0, 30_000.0),
//! ];
//!
//! let run = CostSimulator::new(config).unwrap().run(&risks).unwrap();
//! let s = &run.statistics;
//! assert!(s.p10 <= s.median && s.median <= s.p90);
//! assert_eq!(run.histogram.total_count(), 10_000);
//! ```

pub mod config;
pub mod engine;
pub mod parallel;
pub mod result;

pub use config::{
    ExecutionMode, SimulationConfig, SimulationConfigBuilder, DEFAULT_CHUNK_SIZE,
    DEFAULT_NUM_BINS,
};
pub use engine::{run_trials, simulate_trial, validate_profiles, CostSimulator};
pub use parallel::{chunk_count, run_partitioned};
pub use result::{SimulationRun, TrialBatch};
