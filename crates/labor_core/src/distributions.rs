//! Weighted attribute tables used while the scenario is built.
//!
//! Each table keeps a cumulative weight array so that one uniform draw in
//! `[0, total)` selects an entry. Tables are initialization-time helpers only;
//! the daily matching and state machines never sample from them.

use rand::Rng;

use crate::ecs::WorkerKind;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    choices: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Copy> WeightedTable<T> {
    /// Builds a table from `(weight, choice)` pairs. Negative weights count as zero.
    pub fn new(entries: &[(f64, T)]) -> Self {
        let mut choices = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0.0;
        for &(weight, choice) in entries {
            total += weight.max(0.0);
            choices.push(choice);
            cumulative.push(total);
        }
        Self {
            choices,
            cumulative,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Draws one entry. Returns `None` without consuming randomness when the
    /// table is empty or carries no weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        let total = self.total_weight();
        if self.choices.is_empty() || total <= 0.0 {
            return None;
        }
        let r = rng.gen_range(0.0..total);
        let idx = self.cumulative.partition_point(|&upto| upto <= r);
        self.choices.get(idx).or_else(|| self.choices.last()).copied()
    }
}

/// Worker population mix: freeter 30%, student 37%, housewife 24%, foreigner 9%.
pub fn worker_kind_table() -> WeightedTable<WorkerKind> {
    WeightedTable::new(&[
        (30.0, WorkerKind::Freeter),
        (37.0, WorkerKind::Student),
        (24.0, WorkerKind::Housewife),
        (9.0, WorkerKind::Foreigner),
    ])
}

/// Company hiring-difficulty grade (1 easiest, 6 hardest).
pub fn company_level_table() -> WeightedTable<u8> {
    WeightedTable::new(&[
        (20.0, 1),
        (30.0, 2),
        (20.0, 3),
        (15.0, 4),
        (10.0, 5),
        (5.0, 6),
    ])
}

/// Company size class (1 small, 4 large).
pub fn company_scale_table() -> WeightedTable<u8> {
    WeightedTable::new(&[(50.1, 1), (30.9, 2), (11.7, 3), (7.3, 4)])
}

pub fn occupancy_table() -> WeightedTable<f64> {
    WeightedTable::new(&[(1.0, 0.5), (1.0, 0.6), (1.0, 0.7), (1.0, 0.8)])
}

/// Unit price per customer in yen.
pub fn price_table() -> WeightedTable<u32> {
    WeightedTable::new(&[
        (1.0, 1000),
        (1.0, 2000),
        (1.0, 3000),
        (1.0, 4000),
        (1.0, 5000),
    ])
}

/// All attribute tables sampled while building a scenario.
#[derive(Debug, Clone)]
pub struct AttributeTables {
    pub worker_kinds: WeightedTable<WorkerKind>,
    pub company_levels: WeightedTable<u8>,
    pub company_scales: WeightedTable<u8>,
    pub occupancies: WeightedTable<f64>,
    pub prices: WeightedTable<u32>,
}

impl Default for AttributeTables {
    fn default() -> Self {
        Self {
            worker_kinds: worker_kind_table(),
            company_levels: company_level_table(),
            company_scales: company_scale_table(),
            occupancies: occupancy_table(),
            prices: price_table(),
        }
    }
}
