//! End-of-day market statistics.

use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::SimulationClock;
use crate::ecs::{AgentRoster, Company, CompanyFinancials, Worker, WorkerState};
use crate::telemetry::{DailyRecord, SimTelemetry};

/// Market-wide aggregates for the current agent state.
pub fn compute_daily_record(
    day_index: u64,
    roster: &AgentRoster,
    workers: &Query<&Worker>,
    companies: &Query<(&Company, Option<&CompanyFinancials>)>,
    turnover_rate: f64,
) -> DailyRecord {
    let mut employed = 0usize;
    let mut wage_sum = 0.0;
    for worker in roster.workers.iter().filter_map(|e| workers.get(*e).ok()) {
        if worker.state != WorkerState::Employed {
            continue;
        }
        employed += 1;
        if let Some((company, _)) = worker.employer.and_then(|e| companies.get(e).ok()) {
            wage_sum += company.wage();
        }
    }

    let mut total_profit = 0.0;
    let mut filled = 0usize;
    let mut frame = 0usize;
    for (company, financials) in roster.companies.iter().filter_map(|e| companies.get(*e).ok()) {
        total_profit += financials.map_or(0.0, |f| f.profit);
        filled += company.employees.len();
        frame += company.frame;
    }

    let total_workers = roster.workers.len();
    DailyRecord {
        day_index,
        employment_rate: if total_workers == 0 {
            0.0
        } else {
            employed as f64 / total_workers as f64
        },
        average_wage: if employed == 0 {
            0.0
        } else {
            wage_sum / employed as f64
        },
        total_profit,
        job_matching_rate: if frame == 0 {
            0.0
        } else {
            filled as f64 / frame as f64
        },
        turnover_rate,
    }
}

pub fn record_daily_statistics_system(
    clock: Res<SimulationClock>,
    roster: Res<AgentRoster>,
    mut telemetry: ResMut<SimTelemetry>,
    workers: Query<&Worker>,
    companies: Query<(&Company, Option<&CompanyFinancials>)>,
) {
    let turnover_rate = telemetry.today.turnover_rate();
    let record = compute_daily_record(clock.now(), &roster, &workers, &companies, turnover_rate);
    telemetry.finish_day(record);
}
