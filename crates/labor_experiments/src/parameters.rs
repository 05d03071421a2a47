//! Parameter grids for seed sweeps.
//!
//! A [`ParameterSpace`] is the Cartesian product of market sizes, matching
//! rules and seeds over a shared base configuration. Every combination of
//! market size and matching rule is one experiment; every seed within it is
//! one run.

use labor_core::matching::MatchingAlgorithmType;
use labor_core::{ConfigError, ScenarioParams};

/// A single parameter configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    /// Base scenario parameters.
    pub params: ScenarioParams,
    /// Identifies the configuration shared by all seeds of one experiment.
    pub experiment_id: String,
    /// Run index within the experiment.
    pub run_id: usize,
    /// Seed used for this run.
    pub seed: u64,
    /// Days to simulate.
    pub periods: u64,
}

impl ParameterSet {
    pub fn new(
        params: ScenarioParams,
        experiment_id: String,
        run_id: usize,
        seed: u64,
        periods: u64,
    ) -> Self {
        Self {
            params,
            experiment_id,
            run_id,
            seed,
            periods,
        }
    }

    /// Get the scenario params with seed applied.
    pub fn scenario_params(&self) -> ScenarioParams {
        self.params.clone().with_seed(self.seed)
    }
}

/// Defines a grid of configurations to sweep.
///
/// Dimensions left empty fall back to the base configuration's value. Seeds
/// are the exception: an explicitly empty seed list is rejected by
/// [`Self::generate`] rather than replaced by the base seed.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    base: ScenarioParams,
    worker_counts: Vec<usize>,
    company_counts: Vec<usize>,
    matching_algorithms: Vec<MatchingAlgorithmType>,
    seeds: Option<Vec<u64>>,
    periods: u64,
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self {
            base: ScenarioParams::default(),
            worker_counts: vec![],
            company_counts: vec![],
            matching_algorithms: vec![],
            seeds: None,
            periods: 120,
        }
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    pub fn worker_count(mut self, counts: Vec<usize>) -> Self {
        self.worker_counts = counts;
        self
    }

    pub fn company_count(mut self, counts: Vec<usize>) -> Self {
        self.company_counts = counts;
        self
    }

    pub fn matching_algorithm(mut self, algorithms: Vec<MatchingAlgorithmType>) -> Self {
        self.matching_algorithms = algorithms;
        self
    }

    pub fn seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// `count` consecutive seeds starting at `first`.
    pub fn seed_range(self, first: u64, count: u64) -> Self {
        self.seeds((first..first.saturating_add(count)).collect())
    }

    pub fn periods(mut self, periods: u64) -> Self {
        self.periods = periods;
        self
    }

    /// Number of parameter sets [`Self::generate`] yields.
    pub fn len(&self) -> usize {
        fn dim<T>(values: &[T]) -> usize {
            values.len().max(1)
        }
        let seeds = self.seeds.as_ref().map_or(1, Vec::len);
        dim(&self.worker_counts) * dim(&self.company_counts) * dim(&self.matching_algorithms) * seeds
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate all parameter sets (Cartesian product).
    ///
    /// Seeds vary fastest, so the runs of one experiment are contiguous.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonPositiveSeedCount`] when the seed list was set but is
    /// empty, e.g. `seed_range(first, 0)`.
    pub fn generate(&self) -> Result<Vec<ParameterSet>, ConfigError> {
        let seeds = match &self.seeds {
            Some(seeds) if seeds.is_empty() => return Err(ConfigError::NonPositiveSeedCount),
            Some(seeds) => seeds.clone(),
            None => vec![self.base.seed_or_default()],
        };
        let worker_counts = or_base(&self.worker_counts, self.base.worker_count);
        let company_counts = or_base(&self.company_counts, self.base.company_count);
        let algorithms = or_base(&self.matching_algorithms, self.base.matching_algorithm);

        let mut sets = Vec::with_capacity(self.len());
        let mut experiment = 0;
        for &workers in &worker_counts {
            for &companies in &company_counts {
                for &algorithm in &algorithms {
                    let params = self
                        .base
                        .clone()
                        .with_worker_count(workers)
                        .with_company_count(companies)
                        .with_matching_algorithm(algorithm);
                    let experiment_id = format!("exp_{experiment}");
                    for (run_id, &seed) in seeds.iter().enumerate() {
                        sets.push(ParameterSet::new(
                            params.clone(),
                            experiment_id.clone(),
                            run_id,
                            seed,
                            self.periods,
                        ));
                    }
                    experiment += 1;
                }
            }
        }
        Ok(sets)
    }
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}

fn or_base<T: Copy>(values: &[T], base: T) -> Vec<T> {
    if values.is_empty() {
        vec![base]
    } else {
        values.to_vec()
    }
}
