//! Metrics extraction from completed runs.
//!
//! Pulls the end-of-run summary, the cumulative flow counters and the final
//! worker-type and company-level distributions out of a simulation.

use std::collections::BTreeMap;

use bevy_ecs::prelude::World;
use labor_core::ecs::{AgentRoster, Company, Worker, WorkerKind};
use labor_core::telemetry::{SimTelemetry, SimulationSummary};

use crate::parameters::ParameterSet;

/// Metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SimulationResult {
    pub experiment_id: String,
    pub run_id: usize,
    pub seed: u64,
    pub worker_count: usize,
    pub company_count: usize,
    pub matching_algorithm: String,
    pub periods_run: usize,
    pub final_employment_rate: f64,
    pub final_average_wage: f64,
    pub final_total_profit: f64,
    pub final_job_matching_rate: f64,
    pub max_employment_rate: f64,
    pub min_employment_rate: f64,
    /// Mean of the daily turnover rates.
    pub mean_turnover_rate: f64,
    pub total_applications: usize,
    pub total_hires: usize,
    pub total_rejections: usize,
    pub total_quits: usize,
    pub workers_by_kind: BTreeMap<WorkerKind, usize>,
    pub companies_by_level: BTreeMap<u8, usize>,
}

/// Extract metrics from a built world.
///
/// A world that has not stepped yet reports zero periods and zero rates,
/// with the distributions of its initial market.
pub fn extract_metrics(param_set: &ParameterSet, world: &World) -> SimulationResult {
    let telemetry = world.resource::<SimTelemetry>();
    let summary = SimulationSummary::from_records(&telemetry.records).unwrap_or_default();
    let mean_turnover_rate = if telemetry.records.is_empty() {
        0.0
    } else {
        telemetry.records.iter().map(|r| r.turnover_rate).sum::<f64>()
            / telemetry.records.len() as f64
    };

    let roster = world.resource::<AgentRoster>();
    let mut workers_by_kind = BTreeMap::new();
    for worker in roster.workers.iter().filter_map(|e| world.get::<Worker>(*e)) {
        *workers_by_kind.entry(worker.kind).or_insert(0) += 1;
    }
    let mut companies_by_level = BTreeMap::new();
    for company in roster.companies.iter().filter_map(|e| world.get::<Company>(*e)) {
        *companies_by_level.entry(company.level).or_insert(0) += 1;
    }

    SimulationResult {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        seed: param_set.seed,
        worker_count: roster.workers.len(),
        company_count: roster.companies.len(),
        matching_algorithm: param_set.params.matching_algorithm.label().to_string(),
        periods_run: summary.periods_run,
        final_employment_rate: summary.final_employment_rate,
        final_average_wage: summary.final_average_wage,
        final_total_profit: summary.final_total_profit,
        final_job_matching_rate: summary.final_job_matching_rate,
        max_employment_rate: summary.max_employment_rate,
        min_employment_rate: summary.min_employment_rate,
        mean_turnover_rate,
        total_applications: telemetry.totals.applications,
        total_hires: telemetry.totals.hires,
        total_rejections: telemetry.totals.rejections,
        total_quits: telemetry.totals.quits,
        workers_by_kind,
        companies_by_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labor_core::LaborMarketSimulation;

    #[test]
    fn unstepped_world_reports_zero_periods() {
        let params = labor_core::ScenarioParams::default()
            .with_worker_count(30)
            .with_company_count(3);
        let set = ParameterSet::new(params, "exp_0".into(), 0, 1, 10);
        let sim = LaborMarketSimulation::new(set.scenario_params()).expect("valid");

        let result = extract_metrics(&set, sim.world());
        assert_eq!(result.periods_run, 0);
        assert_eq!(result.final_employment_rate, 0.0);
        assert_eq!(result.mean_turnover_rate, 0.0);
        assert_eq!(result.total_applications, 0);
        assert_eq!(result.workers_by_kind.values().sum::<usize>(), 30);
        assert_eq!(result.companies_by_level.values().sum::<usize>(), 3);
    }

    #[test]
    fn distributions_cover_every_agent() {
        let params = labor_core::ScenarioParams::default()
            .with_worker_count(80)
            .with_company_count(6)
            .with_status_log_interval_days(0);
        let set = ParameterSet::new(params, "exp_0".into(), 0, 4, 20);
        let mut sim = LaborMarketSimulation::new(set.scenario_params()).expect("valid");
        sim.run_quiet(set.periods).expect("run");

        let result = extract_metrics(&set, sim.world());
        assert_eq!(result.periods_run, 20);
        assert_eq!(result.worker_count, 80);
        assert_eq!(result.workers_by_kind.values().sum::<usize>(), 80);
        assert_eq!(result.companies_by_level.values().sum::<usize>(), 6);
        assert!(result.companies_by_level.keys().all(|level| (1..=6).contains(level)));
        assert!(result.total_hires <= result.total_applications);
        assert!((0.0..=1.0).contains(&result.mean_turnover_rate));
        assert_eq!(result.matching_algorithm, "uniform_random");
    }
}
