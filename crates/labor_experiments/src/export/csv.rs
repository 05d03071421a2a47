use std::fs::File;

use anyhow::Result;
use labor_core::economics::WAGE_TABLE;
use labor_core::ecs::WorkerKind;
use labor_core::telemetry::DailyRecord;

use crate::aggregate::ExperimentAggregate;
use crate::metrics::SimulationResult;

/// Company levels get one distribution column each.
fn company_levels() -> impl Iterator<Item = u8> {
    1..=WAGE_TABLE.len() as u8
}

pub(crate) fn export_results_impl(results: &[SimulationResult], file: File) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(file);

    let mut header: Vec<String> = [
        "experiment_id",
        "run_id",
        "seed",
        "worker_count",
        "company_count",
        "matching_algorithm",
        "periods_run",
        "final_employment_rate",
        "final_average_wage",
        "final_total_profit",
        "final_job_matching_rate",
        "max_employment_rate",
        "min_employment_rate",
        "mean_turnover_rate",
        "total_applications",
        "total_hires",
        "total_rejections",
        "total_quits",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(WorkerKind::ALL.iter().map(|kind| format!("workers_{kind}")));
    header.extend(company_levels().map(|level| format!("companies_level_{level}")));
    wtr.write_record(&header)?;

    for result in results {
        let mut row = vec![
            result.experiment_id.clone(),
            result.run_id.to_string(),
            result.seed.to_string(),
            result.worker_count.to_string(),
            result.company_count.to_string(),
            result.matching_algorithm.clone(),
            result.periods_run.to_string(),
            result.final_employment_rate.to_string(),
            result.final_average_wage.to_string(),
            result.final_total_profit.to_string(),
            result.final_job_matching_rate.to_string(),
            result.max_employment_rate.to_string(),
            result.min_employment_rate.to_string(),
            result.mean_turnover_rate.to_string(),
            result.total_applications.to_string(),
            result.total_hires.to_string(),
            result.total_rejections.to_string(),
            result.total_quits.to_string(),
        ];
        row.extend(
            WorkerKind::ALL
                .iter()
                .map(|kind| result.workers_by_kind.get(kind).copied().unwrap_or(0).to_string()),
        );
        row.extend(company_levels().map(|level| {
            result
                .companies_by_level
                .get(&level)
                .copied()
                .unwrap_or(0)
                .to_string()
        }));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_daily_records_impl(records: &[DailyRecord], file: File) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(file);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_aggregates_impl(aggregates: &[ExperimentAggregate], file: File) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(file);

    let metrics = [
        "final_employment_rate",
        "final_average_wage",
        "final_total_profit",
        "final_job_matching_rate",
        "mean_turnover_rate",
    ];
    let mut header: Vec<String> = [
        "experiment_id",
        "worker_count",
        "company_count",
        "matching_algorithm",
        "runs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for metric in metrics {
        for stat in ["mean", "min", "max"] {
            header.push(format!("{metric}_{stat}"));
        }
    }
    wtr.write_record(&header)?;

    for aggregate in aggregates {
        let mut row = vec![
            aggregate.experiment_id.clone(),
            aggregate.worker_count.to_string(),
            aggregate.company_count.to_string(),
            aggregate.matching_algorithm.clone(),
            aggregate.runs.to_string(),
        ];
        for stats in [
            aggregate.final_employment_rate,
            aggregate.final_average_wage,
            aggregate.final_total_profit,
            aggregate.final_job_matching_rate,
            aggregate.mean_turnover_rate,
        ] {
            row.extend([stats.mean, stats.min, stats.max].map(|v| v.to_string()));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
