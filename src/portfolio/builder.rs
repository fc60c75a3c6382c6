//! Builds one simulated portfolio from the configured parameters.

use crate::core::config::SimulationConfig;
use crate::core::types::Investment;
use crate::portfolio::model::Portfolio;
use crate::sampling::random::RandomSource;
use crate::sampling::sampler::sample;

/// Samples seed and follow-on investments into a [`Portfolio`].
#[derive(Debug, Clone)]
pub struct PortfolioBuilder {
    config: SimulationConfig,
}

impl PortfolioBuilder {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build one portfolio.
    ///
    /// Draws one seed outcome per round, then runs an independent follow-on
    /// trial per round. Follow-on decisions do not depend on which seed deals
    /// did well. Seed investments come first in the result.
    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Portfolio {
        let config = &self.config;
        let mut investments = Vec::with_capacity(config.num_seed_rounds * 2);

        for _ in 0..config.num_seed_rounds {
            let outcome = sample(&config.seed_outcomes, rng);
            investments.push(Investment::initial(config.invested_per_seed_round, outcome));
        }

        for _ in 0..config.num_seed_rounds {
            if !rng.chance(config.follow_on_pct) {
                continue;
            }
            let outcome = sample(&config.follow_on_outcomes, rng);
            investments.push(Investment::follow_on(config.invested_per_follow_on, outcome));
        }

        Portfolio::new(investments)
    }
}
