use std::fmt;
use std::ops::RangeInclusive;

use bevy_ecs::prelude::{Component, Entity, Resource};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::economics::{self, ScaleProfile, FOOD_COST_RATIO};
use crate::turnover::{self, TurnoverTable};

/// Side length of the square grid agents are placed on.
pub const GRID_SIZE: u8 = 5;

/// Notification delay (days) drawn when a worker applies.
pub const NOTIFICATION_DELAY_DAYS: RangeInclusive<u32> = 1..=7;

/// Days a worker spends gathering information before seeking again.
pub const GATHERING_DAYS: u32 = 1;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkerKind {
    #[default]
    Freeter,
    Student,
    Housewife,
    Foreigner,
}

impl WorkerKind {
    pub const ALL: [WorkerKind; 4] = [
        WorkerKind::Freeter,
        WorkerKind::Student,
        WorkerKind::Housewife,
        WorkerKind::Foreigner,
    ];

    /// Skill levels a worker of this kind is drawn from.
    pub fn level_range(self) -> RangeInclusive<u8> {
        match self {
            WorkerKind::Freeter => 2..=6,
            WorkerKind::Student => 3..=5,
            WorkerKind::Housewife => 2..=5,
            WorkerKind::Foreigner => 1..=3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkerKind::Freeter => "freeter",
            WorkerKind::Student => "student",
            WorkerKind::Housewife => "housewife",
            WorkerKind::Foreigner => "foreigner",
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerState {
    /// Never applied anywhere yet.
    Unemployed,
    JobSeeking,
    /// Applied; the company decides once `wait_days` reaches zero.
    AwaitingResult,
    Employed,
    /// Between jobs after a quit or rejection.
    Gathering,
}

impl WorkerState {
    /// States in which the worker is bound to a company.
    pub fn holds_employer(self) -> bool {
        matches!(self, WorkerState::AwaitingResult | WorkerState::Employed)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Component, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: u8,
    pub y: u8,
}

impl GridPosition {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.gen_range(0..GRID_SIZE);
        let y = rng.gen_range(0..GRID_SIZE);
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &GridPosition) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

/// What happened to a worker during its daily step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStepOutcome {
    Continued,
    /// The turnover trial succeeded; the former employer must drop the worker.
    Quit { former_employer: Option<Entity> },
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Worker {
    pub id: u32,
    pub kind: WorkerKind,
    pub level: u8,
    pub state: WorkerState,
    pub employer: Option<Entity>,
    /// Days since the last transition while not employed.
    pub elapsed_days: u32,
    /// Tenure at the current employer.
    pub work_days: u32,
    /// Days left until the applied-to company adjudicates.
    pub wait_days: u32,
}

impl Worker {
    pub fn new(id: u32, kind: WorkerKind, level: u8) -> Self {
        Self {
            id,
            kind,
            level,
            state: WorkerState::Unemployed,
            employer: None,
            elapsed_days: 0,
            work_days: 0,
            wait_days: 0,
        }
    }

    /// Employed with a positive tenure that is a multiple of 30 days.
    pub fn at_turnover_milestone(&self) -> bool {
        self.state == WorkerState::Employed && turnover::is_milestone(self.work_days)
    }

    /// Daily step: turnover trial, gathering → seeking, counters, wait countdown.
    ///
    /// Draws from `rng` only when a turnover milestone is reached.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        hazards: &TurnoverTable,
        rng: &mut R,
    ) -> WorkerStepOutcome {
        let mut outcome = WorkerStepOutcome::Continued;

        if self.at_turnover_milestone() {
            let hazard = hazards.hazard(self.kind, self.work_days);
            if rng.gen::<f64>() < hazard {
                outcome = WorkerStepOutcome::Quit {
                    former_employer: self.quit(),
                };
            }
        }

        if self.state == WorkerState::Gathering && self.elapsed_days == GATHERING_DAYS {
            self.state = WorkerState::JobSeeking;
        }

        if self.state == WorkerState::Employed {
            self.work_days += 1;
        } else {
            self.elapsed_days += 1;
        }

        self.wait_days = self.wait_days.saturating_sub(1);

        outcome
    }

    /// Leaves the current employer. Returns the employer the caller must
    /// remove this worker from.
    pub fn quit(&mut self) -> Option<Entity> {
        self.state = WorkerState::Gathering;
        self.work_days = 0;
        self.wait_days = 0;
        self.elapsed_days = 0;
        self.employer.take()
    }

    /// Binds the worker to `company` as a pending applicant and draws the
    /// notification delay.
    pub fn apply_to_company<R: Rng + ?Sized>(&mut self, company: Entity, rng: &mut R) {
        self.state = WorkerState::AwaitingResult;
        self.employer = Some(company);
        self.wait_days = rng.gen_range(NOTIFICATION_DELAY_DAYS);
        self.elapsed_days = 0;
    }

    pub fn get_hired(&mut self, company: Entity) {
        self.state = WorkerState::Employed;
        self.employer = Some(company);
        self.work_days = 0;
        self.elapsed_days = 0;
        self.wait_days = 0;
    }

    pub fn get_rejected(&mut self) {
        self.state = WorkerState::Gathering;
        self.employer = None;
        self.elapsed_days = 0;
        self.wait_days = 0;
    }

    /// Employer is set exactly in the states that hold one.
    pub fn is_consistent(&self) -> bool {
        self.employer.is_some() == self.state.holds_employer()
    }
}

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Company {
    pub id: u32,
    /// Hiring-difficulty grade 1..=6; also selects the wage.
    pub level: u8,
    pub scale: u8,
    pub frame: usize,
    pub seats: u32,
    pub member_num: u32,
    pub occupancy: f64,
    pub price: u32,
    pub food_cost: f64,
    pub turn_num_max: f64,
    /// Pending applicants in arrival order.
    pub applicants: Vec<Entity>,
    pub employees: Vec<Entity>,
}

impl Company {
    pub fn new(id: u32, level: u8, profile: ScaleProfile, occupancy: f64, price: u32) -> Self {
        Self {
            id,
            level,
            scale: profile.scale,
            frame: profile.frame,
            seats: profile.seats,
            member_num: profile.member_num,
            occupancy,
            price,
            food_cost: f64::from(price) * FOOD_COST_RATIO,
            turn_num_max: economics::max_turns_for_price(price),
            applicants: Vec::new(),
            employees: Vec::new(),
        }
    }

    /// Applicants plus employees.
    pub fn occupied_slots(&self) -> usize {
        self.applicants.len() + self.employees.len()
    }

    pub fn can_accept_applicant(&self) -> bool {
        self.occupied_slots() < self.frame
    }

    /// Skill gate shared by matching and adjudication: a worker qualifies when
    /// its level is at least one below the company's grade.
    pub fn admits_skill_level(&self, worker_level: u8) -> bool {
        i32::from(worker_level) >= i32::from(self.level) - 1
    }

    /// Queues `worker` as an applicant. Returns false, leaving the company
    /// unchanged, when the frame is full.
    pub fn accept_applicant(&mut self, worker: Entity) -> bool {
        if !self.can_accept_applicant() {
            return false;
        }
        self.applicants.push(worker);
        debug_assert!(self.occupied_slots() <= self.frame);
        true
    }

    /// Moves a pending applicant into the workforce.
    pub fn hire(&mut self, worker: Entity) {
        self.remove_applicant(worker);
        if !self.employees.contains(&worker) {
            self.employees.push(worker);
        }
    }

    pub fn remove_applicant(&mut self, worker: Entity) {
        self.applicants.retain(|e| *e != worker);
    }

    /// No-op when `worker` is not employed here.
    pub fn remove_employee(&mut self, worker: Entity) {
        self.employees.retain(|e| *e != worker);
    }

    pub fn open_positions(&self) -> usize {
        self.frame.saturating_sub(self.employees.len())
    }

    pub fn wage(&self) -> f64 {
        economics::wage_for_level(self.level)
    }
}

/// Financial metrics recomputed by the company's daily step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Component)]
pub struct CompanyFinancials {
    pub turn_num: f64,
    pub sales: f64,
    pub food_costs: f64,
    pub labor_costs: f64,
    pub recruitment_costs: f64,
    pub costs: f64,
    pub profit: f64,
}

/// Worker and company entities in creation order. Every daily phase iterates
/// agents in this order so that random draws happen in a reproducible sequence.
#[derive(Debug, Default, Clone, Resource)]
pub struct AgentRoster {
    pub workers: Vec<Entity>,
    pub companies: Vec<Entity>,
}
