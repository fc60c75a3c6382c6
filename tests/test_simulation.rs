//! Integration tests for the SeedSim simulation pipeline.

use seedsim::core::distribution::OutcomeTable;
use seedsim::metrics::Reporter;
use seedsim::sampling::sampler::sample;
use seedsim::{FixedSequence, SeededSource, SimError, SimulationConfig, SimulationRunner};

#[test]
fn test_scripted_draws_select_expected_outcomes() {
    let table = OutcomeTable::new(&[
        (0.01, 100.0),
        (0.03, 20.0),
        (0.03, 10.0),
        (0.03, 6.0),
        (0.25, 1.0),
        (0.65, 0.0),
    ]);
    let mut rng = FixedSequence::new(vec![0.005, 0.5]).unwrap();

    assert_eq!(sample(&table, &mut rng), 100.0);
    assert_eq!(sample(&table, &mut rng), 0.0);
}

#[test]
fn test_fund_size_for_reference_parameters() {
    let config = SimulationConfig {
        num_seed_rounds: 50,
        invested_per_seed_round: 0.5,
        follow_on_pct: 0.5,
        invested_per_follow_on: 1.0,
        ..Default::default()
    };
    assert_eq!(config.fund_size(), 50.0);
}

#[test]
fn test_validation_rejects_before_running() {
    for total in [0.99, 1.01] {
        let config = SimulationConfig {
            seed_outcomes: OutcomeTable::new(&[(0.5, 3.0), (total - 0.5, 0.0)]),
            ..Default::default()
        };
        let err = SimulationRunner::new(config).unwrap_err();
        assert!(matches!(err, SimError::InvalidDistribution { .. }), "sum {}", total);
    }
}

#[test]
fn test_zero_runs_report_cleanly() {
    let runner = SimulationRunner::new(SimulationConfig::default().with_seed(1)).unwrap();
    let portfolios = runner.run(0);
    assert!(portfolios.is_empty());

    let mut buf = Vec::new();
    let summary = Reporter::default()
        .write_report(runner.config(), &portfolios, &mut buf)
        .unwrap();
    assert_eq!(summary.summary.count, 0);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn test_mean_multiple_near_analytic_expectation() {
    let config = SimulationConfig::default().with_seed(31331);
    let expected = config.expected_return_multiple();
    let runner = SimulationRunner::new(config).unwrap();

    let portfolios = runner.run(10_000);
    let mean = portfolios
        .iter()
        .map(|p| p.return_multiple().unwrap())
        .sum::<f64>()
        / portfolios.len() as f64;

    assert!(
        (mean - expected).abs() < expected * 0.15,
        "mean {} vs expected {}",
        mean,
        expected
    );
}

#[test]
fn test_injected_source_matches_configured_seed() {
    let runner = SimulationRunner::new(SimulationConfig::default().with_seed(77)).unwrap();
    let mut rng = SeededSource::from_seed(77);
    assert_eq!(runner.run(5), runner.run_with(5, &mut rng));
}

#[test]
fn test_full_report_shape() {
    let runner = SimulationRunner::new(SimulationConfig::default().with_seed(9)).unwrap();
    let portfolios = runner.run(500);

    let mut buf = Vec::new();
    let summary = Reporter::default()
        .write_report(runner.config(), &portfolios, &mut buf)
        .unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.matches("    P: ").count(), 10);
    assert!(text.contains("# of portfolios with different multiple returns\n"));
    assert!(text.contains("# of portfolios with different multiple returns (to 0.1x)\n"));

    let whole_total: usize = summary.whole_buckets.buckets.iter().map(|b| b.count).sum();
    let tenth_total: usize = summary.tenth_buckets.buckets.iter().map(|b| b.count).sum();
    assert_eq!(whole_total, 500);
    assert_eq!(tenth_total, 500);
    assert_eq!(summary.summary.count, 500);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["fund_size"], 50.0);
    assert_eq!(json["config"]["num_seed_rounds"], 50);
}
