//! Console reporting for simulation results.
//!
//! All writers take an [`io::Write`] sink so reports can be captured in tests
//! or redirected by the caller. Nothing here affects simulation results.

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use super::histogram::{BucketWidth, Histogram};
use super::summary::DistributionSummary;
use crate::core::config::SimulationConfig;
use crate::portfolio::model::Portfolio;

/// Number of sample portfolios printed by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Bar characters per percentage point in the fine-grained histogram.
const STARS_PER_PCT: f64 = 10.0;

/// Machine-readable digest of one report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub config: SimulationConfig,
    pub fund_size: f64,
    pub expected_return_multiple: f64,
    /// Portfolios whose return multiple could not be computed.
    pub skipped: usize,
    pub summary: DistributionSummary,
    pub whole_buckets: Histogram,
    pub tenth_buckets: Histogram,
}

/// Writes the human-readable simulation report.
#[derive(Debug, Clone)]
pub struct Reporter {
    sample_size: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl Reporter {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Print the fund parameters before a run.
    pub fn write_parameters<W: Write>(
        &self,
        config: &SimulationConfig,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "Parameters")?;
        writeln!(
            out,
            "    ${:.0}m fund which makes {} ${}m seed investments.",
            config.fund_size(),
            config.num_seed_rounds,
            decimal(config.invested_per_seed_round)
        )?;
        writeln!(
            out,
            "    Follows on with ${}m, {} of the time.",
            decimal(config.invested_per_follow_on),
            decimal(config.follow_on_pct)
        )?;
        writeln!(
            out,
            "    Expected return multiple {:.3}x over {} simulations.",
            config.expected_return_multiple(),
            config.num_simulations
        )?;
        Ok(())
    }

    /// Print sample portfolios, both histograms and summary statistics.
    pub fn write_report<W: Write>(
        &self,
        config: &SimulationConfig,
        portfolios: &[Portfolio],
        out: &mut W,
    ) -> io::Result<ReportSummary> {
        self.write_samples(portfolios, out)?;

        let (multiples, skipped) = collect_multiples(portfolios);
        let whole = Histogram::from_multiples(&multiples, BucketWidth::Whole);
        let tenth = Histogram::from_multiples(&multiples, BucketWidth::Tenth);
        let summary = DistributionSummary::from_multiples(&multiples);

        write_whole_histogram(&whole, out)?;
        write_tenth_histogram(&tenth, out)?;
        write_summary(&summary, skipped, out)?;

        Ok(ReportSummary {
            config: config.clone(),
            fund_size: config.fund_size(),
            expected_return_multiple: config.expected_return_multiple(),
            skipped,
            summary,
            whole_buckets: whole,
            tenth_buckets: tenth,
        })
    }

    fn write_samples<W: Write>(&self, portfolios: &[Portfolio], out: &mut W) -> io::Result<()> {
        writeln!(out, "Sample portfolios:")?;
        for portfolio in portfolios.iter().take(self.sample_size) {
            match portfolio.metrics() {
                Ok(metrics) => writeln!(out, "    P: {}", metrics)?,
                Err(err) => writeln!(out, "    P: <{}>", err)?,
            }
        }
        Ok(())
    }
}

/// Shortest decimal form, keeping a trailing `.0` on whole numbers.
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Return multiples of every portfolio that has one, plus the number skipped.
fn collect_multiples(portfolios: &[Portfolio]) -> (Vec<f64>, usize) {
    let mut multiples = Vec::with_capacity(portfolios.len());
    let mut skipped = 0;
    for (idx, portfolio) in portfolios.iter().enumerate() {
        match portfolio.return_multiple() {
            Ok(m) => multiples.push(m),
            Err(err) => {
                warn!(portfolio = idx, error = %err, "skipping portfolio");
                skipped += 1;
            }
        }
    }
    (multiples, skipped)
}

fn write_whole_histogram<W: Write>(histogram: &Histogram, out: &mut W) -> io::Result<()> {
    writeln!(out, "# of portfolios with different multiple returns")?;
    if histogram.is_empty() {
        return writeln!(out, "  (no portfolios)");
    }
    for bucket in &histogram.buckets {
        writeln!(out, "  {}x - {} ({:.0}%)", bucket.value, bucket.count, bucket.pct)?;
    }
    Ok(())
}

fn write_tenth_histogram<W: Write>(histogram: &Histogram, out: &mut W) -> io::Result<()> {
    writeln!(out, "# of portfolios with different multiple returns (to 0.1x)")?;
    if histogram.is_empty() {
        return writeln!(out, "  (no portfolios)");
    }
    for bucket in &histogram.buckets {
        let stars = "*".repeat((bucket.pct * STARS_PER_PCT) as usize);
        writeln!(
            out,
            "  {:.1}x - {} ({:.0}%) ({:.0}%) {}",
            bucket.value, bucket.count, bucket.pct, bucket.cumulative_pct, stars
        )?;
    }
    Ok(())
}

fn write_summary<W: Write>(
    summary: &DistributionSummary,
    skipped: usize,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Return multiple distribution")?;
    if summary.count == 0 {
        return writeln!(out, "  (no portfolios)");
    }
    writeln!(
        out,
        "  mean {:.3}x, median {:.3}x, std dev {:.3}",
        summary.mean, summary.median, summary.std_dev
    )?;
    writeln!(out, "  min {:.3}x, max {:.3}x", summary.min, summary.max)?;
    let percentiles: Vec<String> = summary
        .percentiles
        .iter()
        .map(|(pct, value)| format!("p{:.0} {:.2}x", pct, value))
        .collect();
    writeln!(out, "  {}", percentiles.join(", "))?;
    writeln!(
        out,
        "  probability of losing capital {:.1}%",
        summary.probability_of_loss * 100.0
    )?;
    if skipped > 0 {
        writeln!(out, "  skipped {} portfolios with no invested capital", skipped)?;
    }
    Ok(())
}
