//! Worker phase: every worker steps once, in roster order.
//!
//! Turnover trials happen here. A quitting worker is removed from its former
//! employer in the same pass.

use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::trace;

use crate::clock::SimulationClock;
use crate::ecs::{AgentRoster, Company, Worker, WorkerState, WorkerStepOutcome};
use crate::rng::SimRng;
use crate::telemetry::SimTelemetry;
use crate::turnover::TurnoverTable;

/// Steps every worker in roster order. A quit detaches the worker from its
/// employer's workforce in the same pass.
pub fn worker_step_system(
    clock: Res<SimulationClock>,
    roster: Res<AgentRoster>,
    hazards: Res<TurnoverTable>,
    mut rng: ResMut<SimRng>,
    mut telemetry: ResMut<SimTelemetry>,
    mut workers: Query<&mut Worker>,
    mut companies: Query<&mut Company>,
) {
    let rng: &mut SimRng = &mut rng;

    telemetry.today.employed_at_start = roster
        .workers
        .iter()
        .filter_map(|entity| workers.get(*entity).ok())
        .filter(|worker| worker.state == WorkerState::Employed)
        .count();

    for &entity in &roster.workers {
        let Ok(mut worker) = workers.get_mut(entity) else {
            continue;
        };
        let WorkerStepOutcome::Quit { former_employer } = worker.step(&hazards, rng) else {
            continue;
        };

        trace!(day = clock.now(), worker = worker.id, kind = %worker.kind, "worker quit");
        if let Some(company_entity) = former_employer {
            if let Ok(mut company) = companies.get_mut(company_entity) {
                company.remove_employee(entity);
            }
        }
        telemetry.today.quits += 1;
    }
}
