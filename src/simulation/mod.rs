//! Monte Carlo simulation loop.

pub mod runner;

pub use runner::SimulationRunner;
