//! Experiment harness for the restaurant labor-market simulation.
//!
//! Runs a configuration over many seeds (and optionally over a grid of
//! market sizes and matching rules), extracts per-run metrics, aggregates
//! them across seeds and exports everything as CSV or JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use labor_experiments::{aggregate_by_experiment, run_experiments, ParameterSpace};
//!
//! let sets = ParameterSpace::grid()
//!     .company_count(vec![5, 10, 20])
//!     .seed_range(0, 10)
//!     .periods(120)
//!     .generate()
//!     .expect("at least one seed");
//!
//! let results = run_experiments(&sets).expect("valid configuration");
//! for aggregate in aggregate_by_experiment(&results) {
//!     println!("{} companies: {:.3}", aggregate.company_count, aggregate.final_employment_rate.mean);
//! }
//! ```
//!
//! - [`parameters`]: parameter grids and seed ranges
//! - [`runner`]: sequential execution with an optional progress bar
//! - [`metrics`]: per-run metric extraction
//! - [`aggregate`]: mean/min/max across the seeds of an experiment
//! - [`export`]: CSV and JSON writers

pub mod aggregate;
pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use aggregate::{aggregate_by_experiment, ExperimentAggregate, MetricStats};
pub use export::{
    export_aggregates_to_csv, export_aggregates_to_json, export_daily_records_to_csv,
    export_to_csv, export_to_json,
};
pub use metrics::SimulationResult;
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_experiments, run_single_simulation};
