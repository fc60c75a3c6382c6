//! Core types and parameters for SeedSim.

pub mod config;
pub mod distribution;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use distribution::{Outcome, OutcomeTable, PROBABILITY_TOLERANCE};
pub use error::{Result, SimError};
pub use types::*;
