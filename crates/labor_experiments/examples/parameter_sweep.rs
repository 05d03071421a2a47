//! Example: how the number of restaurants changes employment.
//!
//! Sweeps the company count over ten seeds each, prints the cross-seed
//! aggregates and exports everything to CSV.

use labor_core::matching::MatchingAlgorithmType;
use labor_experiments::{
    aggregate_by_experiment, export_aggregates_to_csv, export_to_csv, run_experiments,
    ParameterSpace,
};

fn main() -> anyhow::Result<()> {
    println!("Starting company-count sweep...");

    let space = ParameterSpace::grid()
        .company_count(vec![5, 10, 20, 40])
        .matching_algorithm(vec![
            MatchingAlgorithmType::UniformRandom,
            MatchingAlgorithmType::FirstFit,
        ])
        .seed_range(0, 10)
        .periods(120);
    let parameter_sets = space.generate()?;
    println!("Generated {} parameter sets", parameter_sets.len());

    let results = run_experiments(&parameter_sets)?;
    let aggregates = aggregate_by_experiment(&results);

    println!("\n=== Employment by company count ===");
    for aggregate in &aggregates {
        let employment = aggregate.final_employment_rate;
        println!(
            "{:>3} companies, {:<14} employment {:.2}% (min {:.2}%, max {:.2}%), profit {:.0}",
            aggregate.company_count,
            aggregate.matching_algorithm,
            employment.mean * 100.0,
            employment.min * 100.0,
            employment.max * 100.0,
            aggregate.final_total_profit.mean
        );
    }

    export_to_csv(&results, "experiment_results.csv")?;
    export_aggregates_to_csv(&aggregates, "experiment_aggregates.csv")?;
    println!("\nExported to experiment_results.csv and experiment_aggregates.csv");

    Ok(())
}
