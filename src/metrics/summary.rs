//! Summary statistics over simulated return multiples.

use serde::{Deserialize, Serialize};

/// Percentiles reported by [`DistributionSummary`].
pub const REPORTED_PERCENTILES: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

/// Distribution of portfolio return multiples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Number of multiples summarised.
    pub count: usize,
    /// Mean multiple.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest multiple.
    pub min: f64,
    /// Largest multiple.
    pub max: f64,
    /// Median multiple.
    pub median: f64,
    /// (percentile, value) pairs for [`REPORTED_PERCENTILES`].
    pub percentiles: Vec<(f64, f64)>,
    /// Share of portfolios returning less than the capital invested.
    pub probability_of_loss: f64,
}

impl DistributionSummary {
    /// Summarise `multiples`. An empty slice yields the all-zero default.
    pub fn from_multiples(multiples: &[f64]) -> Self {
        if multiples.is_empty() {
            return Self::default();
        }

        let mut sorted = multiples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let var = sorted.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n as f64;
        let n_loss = sorted.iter().filter(|&&m| m < 1.0).count();

        Self {
            count: n,
            mean,
            std_dev: var.sqrt(),
            min: sorted[0],
            max: sorted[n - 1],
            median: percentile(&sorted, 50.0),
            percentiles: REPORTED_PERCENTILES
                .iter()
                .map(|&pct| (pct, percentile(&sorted, pct)))
                .collect(),
            probability_of_loss: n_loss as f64 / n as f64,
        }
    }
}

/// Nearest-rank percentile over an ascending, non-empty slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    let idx = ((pct / 100.0) * (n as f64 - 1.0)).round() as usize;
    sorted[idx.min(n - 1)]
}
