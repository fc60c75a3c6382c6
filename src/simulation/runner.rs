//! Repeats portfolio construction and collects the results.

use std::time::Instant;

use tracing::{debug, info};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::portfolio::builder::PortfolioBuilder;
use crate::portfolio::model::Portfolio;
use crate::sampling::random::{RandomSource, SeededSource};

/// Progress is logged every this many portfolios.
const PROGRESS_INTERVAL: usize = 1_000;

/// Runs the Monte Carlo loop over [`PortfolioBuilder`].
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    builder: PortfolioBuilder,
}

impl SimulationRunner {
    /// Create a runner after validating `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: PortfolioBuilder::new(config),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        self.builder.config()
    }

    /// Run `config.num_simulations` portfolios.
    pub fn run_configured(&self) -> Vec<Portfolio> {
        self.run(self.config().num_simulations)
    }

    /// Run `n` portfolios with a generator built from `config.seed`.
    pub fn run(&self, n: usize) -> Vec<Portfolio> {
        let mut rng = SeededSource::new(self.config().seed);
        match rng.seed() {
            Some(seed) => debug!(seed, "using fixed seed"),
            None => debug!("seeding from entropy"),
        }
        self.run_with(n, &mut rng)
    }

    /// Run `n` portfolios drawing from `rng`, in creation order.
    pub fn run_with<R: RandomSource + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Portfolio> {
        let started = Instant::now();
        let mut portfolios = Vec::with_capacity(n);

        for i in 0..n {
            portfolios.push(self.builder.build(rng));
            if (i + 1) % PROGRESS_INTERVAL == 0 {
                debug!(completed = i + 1, total = n, "simulation progress");
            }
        }

        info!(
            portfolios = portfolios.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "simulation complete"
        );
        portfolios
    }
}
