//! SeedSim - Monte Carlo simulator for seed-stage venture fund returns.
//!
//! This crate provides:
//! - Outcome distribution tables per investment stage
//! - Inverse-CDF sampling through an injectable random source
//! - Portfolio construction with independent follow-on trials
//! - A simulation runner and distribution reporting

pub mod core;
pub mod metrics;
pub mod portfolio;
pub mod sampling;
pub mod simulation;
pub mod telemetry;

pub use crate::core::{Investment, OutcomeTable, Result, SimError, SimulationConfig, Stage};
pub use crate::metrics::{ReportSummary, Reporter};
pub use crate::portfolio::{Portfolio, PortfolioBuilder, PortfolioMetrics};
pub use crate::sampling::{FixedSequence, RandomSource, SeededSource};
pub use crate::simulation::SimulationRunner;
