//! SeedSim CLI
//!
//! Runs the seed fund Monte Carlo simulation and prints the return
//! distribution. Every flag defaults to the built-in fund parameters.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use seedsim::telemetry::init_tracing;
use seedsim::{Reporter, SimulationConfig, SimulationRunner};

#[derive(Parser)]
#[command(name = "seedsim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Monte Carlo simulation of seed fund returns", long_about = None)]
struct Cli {
    /// Number of seed investments per portfolio
    #[arg(long)]
    seed_rounds: Option<usize>,

    /// Average seed check size ($m)
    #[arg(long)]
    seed_check: Option<f64>,

    /// Probability of following on, per seed round
    #[arg(long)]
    follow_on_pct: Option<f64>,

    /// Average follow-on check size ($m)
    #[arg(long)]
    follow_on_check: Option<f64>,

    /// Number of portfolios to simulate
    #[arg(short = 'n', long)]
    simulations: Option<usize>,

    /// Fixed RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sample portfolios to print
    #[arg(long, default_value_t = seedsim::metrics::DEFAULT_SAMPLE_SIZE)]
    sample: usize,

    /// Print a JSON summary after the report
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            num_seed_rounds: self.seed_rounds.unwrap_or(defaults.num_seed_rounds),
            invested_per_seed_round: self.seed_check.unwrap_or(defaults.invested_per_seed_round),
            follow_on_pct: self.follow_on_pct.unwrap_or(defaults.follow_on_pct),
            invested_per_follow_on: self.follow_on_check.unwrap_or(defaults.invested_per_follow_on),
            num_simulations: self.simulations.unwrap_or(defaults.num_simulations),
            seed: self.seed.or(defaults.seed),
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.log_json, level);

    let config = cli.config();
    let reporter = Reporter::new(cli.sample);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "starting...")?;
    writeln!(out, "validating params...")?;
    let runner = SimulationRunner::new(config).context("parameter validation failed")?;

    reporter.write_parameters(runner.config(), &mut out)?;
    writeln!(out)?;
    writeln!(out, "Running portfolio simulation...")?;

    info!(
        simulations = runner.config().num_simulations,
        seed = ?runner.config().seed,
        "starting simulation"
    );
    let portfolios = runner.run_configured();
    let summary = reporter.write_report(runner.config(), &portfolios, &mut out)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing report summary")?;
        writeln!(out, "{}", json)?;
    }

    writeln!(out, "done.")?;
    Ok(())
}
