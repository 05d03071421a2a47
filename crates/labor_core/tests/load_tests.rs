//! Load tests for labor_core: full-size markets over a simulated year.

use labor_core::{LaborMarketSimulation, ScenarioPreset};
use std::time::Instant;

#[test]
#[ignore] // Only run explicitly: cargo test --package labor_core --test load_tests -- --ignored
fn research_market_runs_a_year() {
    let preset = ScenarioPreset::Research;
    let mut sim = LaborMarketSimulation::new(preset.params().with_seed(42)).expect("valid");

    let start = Instant::now();
    let days = sim.run_quiet(preset.periods()).expect("run").len();
    let duration = start.elapsed();

    let days_per_sec = days as f64 / duration.as_secs_f64();
    println!(
        "Research market: {} days in {:.2}s ({:.0} days/sec)",
        days,
        duration.as_secs_f64(),
        days_per_sec
    );

    assert_eq!(days, 360);
    assert!(
        days_per_sec > 10.0,
        "Throughput too low: {:.0} days/sec",
        days_per_sec
    );
}
