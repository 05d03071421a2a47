//! Result export.
//!
//! Sweep results, per-experiment aggregates and single-run daily series can
//! be written as CSV (one flat row per item) or pretty-printed JSON.

use std::path::Path;

use anyhow::Result;
use labor_core::telemetry::DailyRecord;

use crate::aggregate::ExperimentAggregate;
use crate::metrics::SimulationResult;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export simulation results to CSV.
///
/// The worker-type and company-level distributions are flattened into one
/// column per type and per level.
///
/// # Errors
///
/// Returns an error if `results` is empty or the file cannot be written.
pub fn export_to_csv(results: &[SimulationResult], path: impl AsRef<Path>) -> Result<()> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_results_impl(results, file)
}

/// Export simulation results to JSON as an array of objects.
pub fn export_to_json(results: &[SimulationResult], path: impl AsRef<Path>) -> Result<()> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export per-experiment aggregates to CSV, one `_mean`/`_min`/`_max` column
/// triple per metric.
pub fn export_aggregates_to_csv(
    aggregates: &[ExperimentAggregate],
    path: impl AsRef<Path>,
) -> Result<()> {
    writer_utils::ensure_not_empty(aggregates)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_aggregates_impl(aggregates, file)
}

pub fn export_aggregates_to_json(
    aggregates: &[ExperimentAggregate],
    path: impl AsRef<Path>,
) -> Result<()> {
    writer_utils::ensure_not_empty(aggregates)?;
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(aggregates, file)
}

/// Export a run's daily records to CSV, one row per day.
pub fn export_daily_records_to_csv(records: &[DailyRecord], path: impl AsRef<Path>) -> Result<()> {
    writer_utils::ensure_not_empty(records)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_daily_records_impl(records, file)
}
