//! Telemetry / KPIs: per-day market records, flow counters, and read-only
//! snapshots for external reporting.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use bevy_ecs::prelude::{Entity, Resource};
use serde::{Deserialize, Serialize};

use crate::ecs::{GridPosition, WorkerKind, WorkerState};

/// Market statistics recorded at the end of each day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day_index: u64,
    /// Employed workers over all workers.
    pub employment_rate: f64,
    /// Mean hourly wage of employed workers; 0 when nobody is employed.
    pub average_wage: f64,
    pub total_profit: f64,
    /// Filled positions over total hiring frame; 0 when the frame is empty.
    pub job_matching_rate: f64,
    /// Quits during the day over workers employed when the day's worker
    /// steps began; 0 when nobody was employed.
    pub turnover_rate: f64,
}

/// Transition counts for one day (or, summed, for a whole run).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFlow {
    pub applications: usize,
    pub hires: usize,
    pub rejections: usize,
    pub quits: usize,
    pub employed_at_start: usize,
}

impl DailyFlow {
    pub fn turnover_rate(&self) -> f64 {
        if self.employed_at_start == 0 {
            0.0
        } else {
            self.quits as f64 / self.employed_at_start as f64
        }
    }

    fn accumulate(&mut self, day: &DailyFlow) {
        self.applications += day.applications;
        self.hires += day.hires;
        self.rejections += day.rejections;
        self.quits += day.quits;
    }
}

/// Collects per-day records. Insert as a resource before running the schedule.
#[derive(Debug, Default, Resource)]
pub struct SimTelemetry {
    pub records: Vec<DailyRecord>,
    /// Counters for the day in progress.
    pub today: DailyFlow,
    /// Counters summed over all completed days (`employed_at_start` unused).
    pub totals: DailyFlow,
}

impl SimTelemetry {
    pub fn begin_day(&mut self) {
        self.today = DailyFlow::default();
    }

    /// Appends the day's record and folds the day's counters into the totals.
    pub fn finish_day(&mut self, record: DailyRecord) {
        let today = self.today;
        self.totals.accumulate(&today);
        self.records.push(record);
    }

    pub fn summary(&self) -> Option<SimulationSummary> {
        SimulationSummary::from_records(&self.records)
    }
}

/// End-of-run summary derived from the accumulated daily records.
///
/// The default value is the summary of a run that has not stepped yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub final_employment_rate: f64,
    pub final_average_wage: f64,
    pub final_total_profit: f64,
    pub final_job_matching_rate: f64,
    pub max_employment_rate: f64,
    pub min_employment_rate: f64,
    pub periods_run: usize,
}

impl SimulationSummary {
    /// `None` when no day has been recorded yet.
    pub fn from_records(records: &[DailyRecord]) -> Option<Self> {
        let last = records.last()?;
        let (min, max) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), r| (min.min(r.employment_rate), max.max(r.employment_rate)),
        );
        Some(Self {
            final_employment_rate: last.employment_rate,
            final_average_wage: last.average_wage,
            final_total_profit: last.total_profit,
            final_job_matching_rate: last.job_matching_rate,
            max_employment_rate: max,
            min_employment_rate: min,
            periods_run: records.len(),
        })
    }
}

/// Aggregated counts at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarketCounts {
    pub workers_unemployed: usize,
    pub workers_job_seeking: usize,
    pub workers_awaiting_result: usize,
    pub workers_employed: usize,
    pub workers_gathering: usize,
    pub pending_applicants: usize,
    pub filled_positions: usize,
    pub total_frame: usize,
}

impl MarketCounts {
    pub fn add_worker(&mut self, state: WorkerState) {
        match state {
            WorkerState::Unemployed => self.workers_unemployed += 1,
            WorkerState::JobSeeking => self.workers_job_seeking += 1,
            WorkerState::AwaitingResult => self.workers_awaiting_result += 1,
            WorkerState::Employed => self.workers_employed += 1,
            WorkerState::Gathering => self.workers_gathering += 1,
        }
    }

    pub fn add_company(&mut self, applicants: usize, employees: usize, frame: usize) {
        self.pending_applicants += applicants;
        self.filled_positions += employees;
        self.total_frame += frame;
    }

    pub fn total_workers(&self) -> usize {
        self.workers_unemployed
            + self.workers_job_seeking
            + self.workers_awaiting_result
            + self.workers_employed
            + self.workers_gathering
    }
}

/// Snapshot of one worker for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerSnapshot {
    #[serde(skip)]
    pub entity: Entity,
    pub id: u32,
    pub kind: WorkerKind,
    pub level: u8,
    pub state: WorkerState,
    /// Company id of the employer (or the company applied to).
    pub employer_id: Option<u32>,
    pub work_days: u32,
    pub position: GridPosition,
}

impl fmt::Display for WorkerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Worker {}: type={}, level={}, state={:?}, work_days={}, position=({},{})",
            self.id,
            self.kind,
            self.level,
            self.state,
            self.work_days,
            self.position.x,
            self.position.y
        )
    }
}

/// Snapshot of one company for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySnapshot {
    #[serde(skip)]
    pub entity: Entity,
    pub id: u32,
    pub level: u8,
    pub scale: u8,
    pub frame: usize,
    pub applicants: usize,
    pub employees: usize,
    pub sales: f64,
    pub profit: f64,
    pub position: GridPosition,
}

impl fmt::Display for CompanySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Company {}: level={}, scale={}, employees={}/{}, applicants={}, sales={:.0}, profit={:.0}, position=({},{})",
            self.id,
            self.level,
            self.scale,
            self.employees,
            self.frame,
            self.applicants,
            self.sales,
            self.profit,
            self.position.x,
            self.position.y
        )
    }
}

/// Snapshot of the market at the end of a day.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub day: u64,
    pub counts: MarketCounts,
    pub workers_by_kind: BTreeMap<WorkerKind, usize>,
    pub companies_by_level: BTreeMap<u8, usize>,
    pub workers: Vec<WorkerSnapshot>,
    pub companies: Vec<CompanySnapshot>,
}

/// Snapshot capture configuration.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimSnapshotConfig {
    pub interval_days: u64,
    pub max_snapshots: usize,
}

impl Default for SimSnapshotConfig {
    fn default() -> Self {
        Self {
            interval_days: 30,
            max_snapshots: 64,
        }
    }
}

/// Rolling snapshot buffer.
#[derive(Debug, Default, Resource)]
pub struct SimSnapshots {
    pub snapshots: VecDeque<MarketSnapshot>,
    pub last_snapshot_at: Option<u64>,
}

impl SimSnapshots {
    pub fn latest(&self) -> Option<&MarketSnapshot> {
        self.snapshots.back()
    }
}

/// Interval for the periodic status log line. 0 disables it.
#[derive(Debug, Clone, Copy, Resource)]
pub struct StatusLogConfig {
    pub interval_days: u64,
}

impl Default for StatusLogConfig {
    fn default() -> Self {
        Self { interval_days: 60 }
    }
}
