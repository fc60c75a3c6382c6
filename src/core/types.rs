//! Core data types for SeedSim.

use serde::{Deserialize, Serialize};

/// Type alias for capital amounts (millions of dollars).
pub type Amount = f64;

/// Type alias for return-on-capital multiples.
pub type Multiple = f64;

/// Investment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First capital deployment into a company.
    Initial,
    /// Additional investment into an already funded company.
    FollowOn,
}

/// A single capital deployment with its sampled outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    stage: Stage,
    amount_invested: Amount,
    outcome_multiple: Multiple,
}

impl Investment {
    /// Create a new investment. The outcome is fixed for its lifetime.
    pub fn new(stage: Stage, amount_invested: Amount, outcome_multiple: Multiple) -> Self {
        Self {
            stage,
            amount_invested,
            outcome_multiple,
        }
    }

    /// Create an initial-stage investment.
    pub fn initial(amount_invested: Amount, outcome_multiple: Multiple) -> Self {
        Self::new(Stage::Initial, amount_invested, outcome_multiple)
    }

    /// Create a follow-on investment.
    pub fn follow_on(amount_invested: Amount, outcome_multiple: Multiple) -> Self {
        Self::new(Stage::FollowOn, amount_invested, outcome_multiple)
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn amount_invested(&self) -> Amount {
        self.amount_invested
    }

    #[inline]
    pub fn outcome_multiple(&self) -> Multiple {
        self.outcome_multiple
    }

    /// Capital returned by this investment.
    #[inline]
    pub fn amount_returned(&self) -> Amount {
        self.amount_invested * self.outcome_multiple
    }
}
