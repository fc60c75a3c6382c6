//! Discrete outcome distributions for a single investment stage.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use super::types::Multiple;

/// Tolerance used when checking that probabilities sum to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// One row of an outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub probability: f64,
    pub multiple: Multiple,
}

impl Outcome {
    pub const fn new(probability: f64, multiple: Multiple) -> Self {
        Self {
            probability,
            multiple,
        }
    }
}

/// Ordered `(probability, multiple)` pairs used for inverse-CDF sampling.
///
/// Entry order matters: samplers walk the table front to back, so the first
/// entry whose cumulative probability reaches the draw wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTable {
    outcomes: Vec<Outcome>,
}

impl OutcomeTable {
    /// Build a table from `(probability, multiple)` pairs, keeping their order.
    pub fn new(pairs: &[(f64, Multiple)]) -> Self {
        Self {
            outcomes: pairs.iter().map(|&(p, m)| Outcome::new(p, m)).collect(),
        }
    }

    /// Default outcomes for seed checks.
    pub fn seed_default() -> Self {
        Self::new(&[
            (0.01, 100.0),
            (0.03, 20.0),
            (0.03, 10.0),
            (0.03, 6.0),
            (0.25, 1.0),
            (0.65, 0.0),
        ])
    }

    /// Default outcomes for follow-on checks.
    pub fn follow_on_default() -> Self {
        Self::new(&[
            (0.02, 30.0),
            (0.06, 15.0),
            (0.06, 8.0),
            (0.06, 4.0),
            (0.30, 1.0),
            (0.50, 0.0),
        ])
    }

    #[inline]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Last entry, used as the fallback when a draw falls past the final cumulative sum.
    pub fn last(&self) -> Option<&Outcome> {
        self.outcomes.last()
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability).sum()
    }

    /// Expected outcome multiple (sum of probability * multiple).
    pub fn expected_multiple(&self) -> Multiple {
        self.outcomes.iter().map(|o| o.probability * o.multiple).sum()
    }

    /// Check the table is usable for sampling.
    ///
    /// `label` names the table in the error message.
    pub fn validate(&self, label: &str) -> Result<()> {
        if self.outcomes.is_empty() {
            return Err(SimError::invalid_distribution(label, "table has no outcomes"));
        }

        for (idx, outcome) in self.outcomes.iter().enumerate() {
            if !outcome.probability.is_finite() || outcome.probability < 0.0 {
                return Err(SimError::invalid_distribution(
                    label,
                    format!("entry {} has invalid probability {}", idx, outcome.probability),
                ));
            }
            if !outcome.multiple.is_finite() || outcome.multiple < 0.0 {
                return Err(SimError::invalid_distribution(
                    label,
                    format!("entry {} has invalid multiple {}", idx, outcome.multiple),
                ));
            }
        }

        let total = self.total_probability();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(SimError::invalid_distribution(
                label,
                format!("probabilities sum to {}, expected 1.0", total),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid() {
        assert!(OutcomeTable::seed_default().validate("seed").is_ok());
        assert!(OutcomeTable::follow_on_default().validate("follow-on").is_ok());
    }

    #[test]
    fn test_default_tables_sum_to_one() {
        let seed = OutcomeTable::seed_default().total_probability();
        let follow = OutcomeTable::follow_on_default().total_probability();
        assert!((seed - 1.0).abs() < PROBABILITY_TOLERANCE);
        assert!((follow - 1.0).abs() < PROBABILITY_TOLERANCE);
    }

    #[test]
    fn test_rejects_short_and_long_sums() {
        let short = OutcomeTable::new(&[(0.50, 2.0), (0.49, 0.0)]);
        let long = OutcomeTable::new(&[(0.50, 2.0), (0.51, 0.0)]);

        let err = short.validate("seed").unwrap_err();
        assert!(matches!(err, SimError::InvalidDistribution { .. }));
        assert!(long.validate("seed").is_err());
    }

    #[test]
    fn test_accepts_float_drift_within_tolerance() {
        // 0.1 + 0.2 + 0.7 != 1.0 exactly in binary floating point
        let table = OutcomeTable::new(&[(0.1, 5.0), (0.2, 1.0), (0.7, 0.0)]);
        assert!(table.validate("drift").is_ok());
    }

    #[test]
    fn test_rejects_negative_entries() {
        let table = OutcomeTable::new(&[(1.2, 2.0), (-0.2, 0.0)]);
        assert!(table.validate("seed").is_err());

        let table = OutcomeTable::new(&[(1.0, -1.0)]);
        assert!(table.validate("seed").is_err());
    }

    #[test]
    fn test_rejects_empty_table() {
        let table = OutcomeTable::new(&[]);
        assert!(table.validate("seed").is_err());
    }

    #[test]
    fn test_expected_multiple() {
        // 1 + 0.6 + 0.3 + 0.18 + 0.25 = 2.33
        let seed = OutcomeTable::seed_default().expected_multiple();
        assert!((seed - 2.33).abs() < 1e-10);

        // 0.6 + 0.9 + 0.48 + 0.24 + 0.3 = 2.52
        let follow = OutcomeTable::follow_on_default().expected_multiple();
        assert!((follow - 2.52).abs() < 1e-10);
    }
}
