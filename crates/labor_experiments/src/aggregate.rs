//! Cross-seed aggregation of sweep results.
//!
//! Runs that share an `experiment_id` differ only by seed; their headline
//! metrics are folded into mean/min/max triples.

use serde::Serialize;

use crate::metrics::SimulationResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricStats {
    /// `None` for an empty iterator.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (count, sum, min, max) = values.into_iter().fold(
            (0usize, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(count, sum, min, max), v| (count + 1, sum + v, min.min(v), max.max(v)),
        );
        (count > 0).then(|| Self {
            mean: sum / count as f64,
            min,
            max,
        })
    }

    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Aggregate of every run of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentAggregate {
    pub experiment_id: String,
    pub worker_count: usize,
    pub company_count: usize,
    pub matching_algorithm: String,
    pub runs: usize,
    pub final_employment_rate: MetricStats,
    pub final_average_wage: MetricStats,
    pub final_total_profit: MetricStats,
    pub final_job_matching_rate: MetricStats,
    pub mean_turnover_rate: MetricStats,
}

impl ExperimentAggregate {
    /// Folds `results`, which must be non-empty and belong to one experiment.
    fn from_runs(results: &[&SimulationResult]) -> Option<Self> {
        let first = results.first()?;
        let stats = |metric: fn(&SimulationResult) -> f64| {
            MetricStats::from_values(results.iter().map(|r| metric(r)))
        };
        Some(Self {
            experiment_id: first.experiment_id.clone(),
            worker_count: first.worker_count,
            company_count: first.company_count,
            matching_algorithm: first.matching_algorithm.clone(),
            runs: results.len(),
            final_employment_rate: stats(|r| r.final_employment_rate)?,
            final_average_wage: stats(|r| r.final_average_wage)?,
            final_total_profit: stats(|r| r.final_total_profit)?,
            final_job_matching_rate: stats(|r| r.final_job_matching_rate)?,
            mean_turnover_rate: stats(|r| r.mean_turnover_rate)?,
        })
    }
}

/// Groups results by experiment, keeping first-seen experiment order.
pub fn aggregate_by_experiment(results: &[SimulationResult]) -> Vec<ExperimentAggregate> {
    let mut groups: Vec<(&str, Vec<&SimulationResult>)> = Vec::new();
    for result in results {
        match groups
            .iter_mut()
            .find(|(id, _)| *id == result.experiment_id)
        {
            Some((_, runs)) => runs.push(result),
            None => groups.push((result.experiment_id.as_str(), vec![result])),
        }
    }
    groups
        .iter()
        .filter_map(|(_, runs)| ExperimentAggregate::from_runs(runs))
        .collect()
}
