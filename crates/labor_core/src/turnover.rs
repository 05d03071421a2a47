//! Tenure-based turnover hazards.
//!
//! A hazard is evaluated only when an employed worker's tenure hits an exact
//! milestone (a positive multiple of 30 days). It is a discrete check at each
//! milestone, not a cumulative survival curve.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::ecs::WorkerKind;

pub const MILESTONE_INTERVAL_DAYS: u32 = 30;
pub const MILESTONE_COUNT: usize = 12;

/// Hazard for tenures past the last milestone and for kinds without a table.
pub const DEFAULT_HAZARD: f64 = 0.01;

/// True when `work_days` is a positive multiple of the milestone interval.
pub fn is_milestone(work_days: u32) -> bool {
    work_days > 0 && work_days % MILESTONE_INTERVAL_DAYS == 0
}

/// Per-kind quit probabilities at tenure milestones 30, 60, ..., 360.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct TurnoverTable {
    rates: BTreeMap<WorkerKind, [f64; MILESTONE_COUNT]>,
}

impl Default for TurnoverTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert(
            WorkerKind::Freeter,
            [0.05, 0.04, 0.04, 0.03, 0.02, 0.02, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03],
        );
        rates.insert(
            WorkerKind::Student,
            [0.13, 0.06, 0.05, 0.05, 0.05, 0.05, 0.05, 0.04, 0.04, 0.04, 0.04, 0.04],
        );
        rates.insert(
            WorkerKind::Housewife,
            [0.03, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02],
        );
        rates.insert(
            WorkerKind::Foreigner,
            [0.10, 0.05, 0.05, 0.04, 0.03, 0.02, 0.02, 0.02, 0.01, 0.01, 0.01, 0.01],
        );
        Self { rates }
    }
}

impl TurnoverTable {
    /// A table with no per-kind entries: every milestone uses [DEFAULT_HAZARD].
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Same probability for every kind at every milestone.
    pub fn uniform(probability: f64) -> Self {
        let rates = WorkerKind::ALL
            .iter()
            .map(|kind| (*kind, [probability; MILESTONE_COUNT]))
            .collect();
        Self { rates }
    }

    pub fn with_kind_rates(mut self, kind: WorkerKind, rates: [f64; MILESTONE_COUNT]) -> Self {
        self.rates.insert(kind, rates);
        self
    }

    /// Override one milestone. Days that are not a milestone in 30..=360 are ignored.
    pub fn with_rate(mut self, kind: WorkerKind, milestone_day: u32, probability: f64) -> Self {
        if let Some(idx) = milestone_index(milestone_day) {
            let entry = self
                .rates
                .entry(kind)
                .or_insert([DEFAULT_HAZARD; MILESTONE_COUNT]);
            entry[idx] = probability;
        }
        self
    }

    /// Quit probability for a worker of `kind` with `work_days` of tenure.
    pub fn hazard(&self, kind: WorkerKind, work_days: u32) -> f64 {
        milestone_index(work_days)
            .and_then(|idx| self.rates.get(&kind).map(|rates| rates[idx]))
            .unwrap_or(DEFAULT_HAZARD)
    }

    /// First entry that is not a probability, if any.
    pub fn first_invalid_rate(&self) -> Option<(WorkerKind, f64)> {
        self.rates.iter().find_map(|(kind, rates)| {
            rates
                .iter()
                .find(|p| !(0.0..=1.0).contains(*p))
                .map(|p| (*kind, *p))
        })
    }
}

fn milestone_index(work_days: u32) -> Option<usize> {
    if !is_milestone(work_days) {
        return None;
    }
    let idx = (work_days / MILESTONE_INTERVAL_DAYS) as usize - 1;
    (idx < MILESTONE_COUNT).then_some(idx)
}
