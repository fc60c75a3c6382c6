//! Portfolio model and construction.

pub mod builder;
pub mod model;

pub use builder::PortfolioBuilder;
pub use model::{Portfolio, PortfolioMetrics};
