//! Simulated portfolio and its derived metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Amount, Investment, Multiple, Stage};

/// Investments made during one simulated fund lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    investments: Vec<Investment>,
}

impl Portfolio {
    pub fn new(investments: Vec<Investment>) -> Self {
        Self { investments }
    }

    #[inline]
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.investments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    /// Sum of capital deployed.
    pub fn total_invested(&self) -> Amount {
        self.investments.iter().map(Investment::amount_invested).sum()
    }

    /// Sum of capital returned.
    pub fn total_returned(&self) -> Amount {
        self.investments.iter().map(Investment::amount_returned).sum()
    }

    /// Total returned over total invested.
    pub fn return_multiple(&self) -> Result<Multiple> {
        let invested = self.total_invested();
        if invested == 0.0 {
            return Err(SimError::division_by_zero("portfolio return multiple"));
        }
        Ok(self.total_returned() / invested)
    }

    /// Number of investments at `stage`.
    pub fn deal_count(&self, stage: Stage) -> usize {
        self.investments.iter().filter(|i| i.stage() == stage).count()
    }

    /// Compute all derived metrics at once.
    pub fn metrics(&self) -> Result<PortfolioMetrics> {
        PortfolioMetrics::from_portfolio(self)
    }
}

/// Derived figures for a single portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_invested: Amount,
    pub total_returned: Amount,
    pub return_multiple: Multiple,
    pub num_deals_total: usize,
    pub num_deals_seed: usize,
    pub num_deals_follow: usize,
}

impl PortfolioMetrics {
    pub fn from_portfolio(portfolio: &Portfolio) -> Result<Self> {
        Ok(Self {
            total_invested: portfolio.total_invested(),
            total_returned: portfolio.total_returned(),
            return_multiple: portfolio.return_multiple()?,
            num_deals_total: portfolio.len(),
            num_deals_seed: portfolio.deal_count(Stage::Initial),
            num_deals_follow: portfolio.deal_count(Stage::FollowOn),
        })
    }
}

impl fmt::Display for PortfolioMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "invested: {}, returned: {}, return_multiple: {:.4}, ",
                "num_deals_total: {}, num_deals_seed: {}, num_deals_follow: {}"
            ),
            self.total_invested,
            self.total_returned,
            self.return_multiple,
            self.num_deals_total,
            self.num_deals_seed,
            self.num_deals_follow
        )
    }
}
