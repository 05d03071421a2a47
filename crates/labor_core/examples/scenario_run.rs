//! Run the standard market for 120 days and print the final state.
//!
//! Run with: cargo run -p labor_core --example scenario_run

use labor_core::{LaborMarketSimulation, ScenarioPreset};

fn main() {
    let preset = ScenarioPreset::Standard;
    let params = preset.params().with_seed(123).with_snapshots(30, 8);

    let mut sim = match LaborMarketSimulation::new(params) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            return;
        }
    };
    if let Err(err) = sim.run(preset.periods()) {
        eprintln!("run failed: {err}");
        return;
    }

    println!("day  employment  avg_wage  matching  turnover");
    for record in sim.records().iter().filter(|r| r.day_index % 10 == 0) {
        println!(
            "{:>3}  {:>10.3}  {:>8.1}  {:>8.3}  {:>8.3}",
            record.day_index,
            record.employment_rate,
            record.average_wage,
            record.job_matching_rate,
            record.turnover_rate
        );
    }

    if let Some(snapshot) = sim.snapshots().latest() {
        println!("\nSnapshot at day {}", snapshot.day);
        for (kind, count) in &snapshot.workers_by_kind {
            println!("  {kind}: {count} workers");
        }
        for company in &snapshot.companies {
            println!("  {company}");
        }
    }

    if let Some(summary) = sim.summary() {
        println!(
            "\nFinal employment rate {:.3} (min {:.3}, max {:.3}), total profit {:.0}",
            summary.final_employment_rate,
            summary.min_employment_rate,
            summary.max_employment_rate,
            summary.final_total_profit
        );
    }
}
