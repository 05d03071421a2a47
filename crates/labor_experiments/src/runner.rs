//! Sequential simulation execution for sweeps.
//!
//! Each parameter set builds its own world from its own seed, so runs share
//! no state and the result order matches the input order.

use indicatif::{ProgressBar, ProgressStyle};
use labor_core::telemetry::DailyRecord;
use labor_core::{ConfigError, LaborMarketSimulation};
use tracing::debug;

use crate::metrics::{extract_metrics, SimulationResult};
use crate::parameters::ParameterSet;

#[derive(Debug, Clone)]
pub struct SimulationArtifacts {
    pub metrics: SimulationResult,
    pub records: Vec<DailyRecord>,
}

/// Runs one parameter set for its configured periods and returns metrics plus
/// the full daily series.
pub fn run_single_simulation_with_artifacts(
    param_set: &ParameterSet,
) -> Result<SimulationArtifacts, ConfigError> {
    let mut sim = LaborMarketSimulation::new(param_set.scenario_params())?;
    let records = sim.run_quiet(param_set.periods)?.to_vec();
    let metrics = extract_metrics(param_set, sim.world());
    debug!(
        experiment_id = %param_set.experiment_id,
        run_id = param_set.run_id,
        seed = param_set.seed,
        employment_rate = metrics.final_employment_rate,
        "run finished"
    );
    Ok(SimulationArtifacts { metrics, records })
}

/// Run a single simulation with the given parameter set.
pub fn run_single_simulation(param_set: &ParameterSet) -> Result<SimulationResult, ConfigError> {
    run_single_simulation_with_artifacts(param_set).map(|artifacts| artifacts.metrics)
}

/// Run every parameter set in order, stopping at the first invalid one.
pub fn run_experiments(
    parameter_sets: &[ParameterSet],
) -> Result<Vec<SimulationResult>, ConfigError> {
    run_experiments_with_progress(parameter_sets, true)
}

/// Run every parameter set in order with an optional progress bar.
pub fn run_experiments_with_progress(
    parameter_sets: &[ParameterSet],
    show_progress: bool,
) -> Result<Vec<SimulationResult>, ConfigError> {
    let total = parameter_sets.len();
    let pb = (show_progress && total > 0).then(|| {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar
    });

    let mut results = Vec::with_capacity(total);
    for param_set in parameter_sets {
        results.push(run_single_simulation(param_set)?);
        if let Some(ref progress_bar) = pb {
            progress_bar.inc(1);
        }
    }

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterSpace;
    use labor_core::ScenarioParams;

    fn small_base() -> ScenarioParams {
        ScenarioParams::default()
            .with_worker_count(40)
            .with_company_count(4)
            .with_status_log_interval_days(0)
    }

    #[test]
    fn single_simulation_reports_its_horizon() {
        let sets = ParameterSpace::grid()
            .with_base(small_base())
            .seeds(vec![3])
            .periods(15)
            .generate()
            .expect("grid");
        let artifacts = run_single_simulation_with_artifacts(&sets[0]).expect("run");
        assert_eq!(artifacts.records.len(), 15);
        assert_eq!(artifacts.metrics.periods_run, 15);
        assert_eq!(artifacts.metrics.seed, 3);
    }

    #[test]
    fn results_keep_input_order_and_are_reproducible() {
        let sets = ParameterSpace::grid()
            .with_base(small_base())
            .seed_range(10, 3)
            .periods(20)
            .generate()
            .expect("grid");
        let first = run_experiments_with_progress(&sets, false).expect("sweep");
        let second = run_experiments_with_progress(&sets, false).expect("sweep");

        let seeds: Vec<u64> = first.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![10, 11, 12]);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_configuration_stops_the_sweep() {
        let sets = ParameterSpace::grid()
            .with_base(small_base())
            .company_count(vec![0])
            .generate()
            .expect("grid");
        assert_eq!(
            run_experiments_with_progress(&sets, false),
            Err(ConfigError::NonPositiveCompanyCount)
        );
    }

    #[test]
    fn zero_periods_is_rejected() {
        let sets = ParameterSpace::grid()
            .with_base(small_base())
            .periods(0)
            .generate()
            .expect("grid");
        assert_eq!(
            run_single_simulation(&sets[0]).err(),
            Some(ConfigError::NonPositivePeriods)
        );
    }
}
