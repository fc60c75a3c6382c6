//! Simulation parameters.

use serde::{Deserialize, Serialize};

use super::distribution::OutcomeTable;
use super::error::{Result, SimError};
use super::types::Amount;

/// Read-only parameters for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of initial investments per portfolio.
    pub num_seed_rounds: usize,
    /// Average check size per initial investment.
    pub invested_per_seed_round: Amount,
    /// Probability the fund follows on, drawn once per seed round.
    pub follow_on_pct: f64,
    /// Average check size per follow-on investment.
    pub invested_per_follow_on: Amount,
    /// Outcomes for initial investments.
    pub seed_outcomes: OutcomeTable,
    /// Outcomes for follow-on investments.
    pub follow_on_outcomes: OutcomeTable,
    /// Number of portfolios to simulate.
    pub num_simulations: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_seed_rounds: 50,
            invested_per_seed_round: 0.5,
            follow_on_pct: 0.5,
            invested_per_follow_on: 1.0,
            seed_outcomes: OutcomeTable::seed_default(),
            follow_on_outcomes: OutcomeTable::follow_on_default(),
            num_simulations: 10_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Same parameters with a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Expected committed capital: seed checks plus expected follow-on checks.
    pub fn fund_size(&self) -> Amount {
        let rounds = self.num_seed_rounds as f64;
        rounds * self.invested_per_seed_round
            + rounds * self.follow_on_pct * self.invested_per_follow_on
    }

    /// Analytic expected portfolio multiple, weighting each stage by its expected capital.
    pub fn expected_return_multiple(&self) -> f64 {
        let rounds = self.num_seed_rounds as f64;
        let seed_capital = rounds * self.invested_per_seed_round;
        let follow_capital = rounds * self.follow_on_pct * self.invested_per_follow_on;
        let total = seed_capital + follow_capital;
        if total <= 0.0 {
            return 0.0;
        }
        (seed_capital * self.seed_outcomes.expected_multiple()
            + follow_capital * self.follow_on_outcomes.expected_multiple())
            / total
    }

    /// Validate both outcome tables and the scalar parameters.
    pub fn validate(&self) -> Result<()> {
        self.seed_outcomes.validate("seed")?;
        self.follow_on_outcomes.validate("follow-on")?;

        if self.num_seed_rounds == 0 {
            return Err(SimError::invalid_parameter(
                "num_seed_rounds must be greater than zero",
            ));
        }
        if !self.invested_per_seed_round.is_finite() || self.invested_per_seed_round <= 0.0 {
            return Err(SimError::invalid_parameter(format!(
                "invested_per_seed_round must be positive, got {}",
                self.invested_per_seed_round
            )));
        }
        if !self.invested_per_follow_on.is_finite() || self.invested_per_follow_on <= 0.0 {
            return Err(SimError::invalid_parameter(format!(
                "invested_per_follow_on must be positive, got {}",
                self.invested_per_follow_on
            )));
        }
        if !(0.0..=1.0).contains(&self.follow_on_pct) {
            return Err(SimError::invalid_parameter(format!(
                "follow_on_pct must be within [0, 1], got {}",
                self.follow_on_pct
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_seed_rounds, 50);
        assert_eq!(config.invested_per_seed_round, 0.5);
        assert_eq!(config.follow_on_pct, 0.5);
        assert_eq!(config.invested_per_follow_on, 1.0);
        assert_eq!(config.num_simulations, 10_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fund_size() {
        let config = SimulationConfig::default();
        assert_eq!(config.fund_size(), 50.0);
    }

    #[test]
    fn test_expected_return_multiple() {
        // (25 * 2.33 + 25 * 2.52) / 50 = 2.425
        let config = SimulationConfig::default();
        assert!((config.expected_return_multiple() - 2.425).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_bad_table() {
        let config = SimulationConfig {
            follow_on_outcomes: OutcomeTable::new(&[(0.5, 1.0), (0.5, 0.0), (0.01, 3.0)]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidDistribution { ref table, .. } if table == "follow-on"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let config = SimulationConfig {
            follow_on_pct: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            num_seed_rounds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            invested_per_seed_round: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
