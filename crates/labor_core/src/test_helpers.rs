//! Test helpers for hand-built markets.
//!
//! Tests that need a specific market (one company with a known frame, a worker
//! at a known tenure) build it here instead of going through `build_scenario`.

use bevy_ecs::prelude::{Entity, World};

use crate::clock::SimulationClock;
use crate::economics::scale_profile;
use crate::ecs::{AgentRoster, Company, CompanyFinancials, GridPosition, Worker, WorkerState};
use crate::matching::{MatchingAlgorithmResource, MatchingAlgorithmType};
use crate::rng::SimRng;
use crate::telemetry::{SimSnapshotConfig, SimSnapshots, SimTelemetry, StatusLogConfig};
use crate::turnover::TurnoverTable;

/// Create a world with every resource the daily schedule reads and an empty
/// roster. Matching is first-fit so tests know where a worker lands.
pub fn create_test_world(seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SimRng::seeded(seed));
    world.insert_resource(AgentRoster::default());
    world.insert_resource(TurnoverTable::default());
    world.insert_resource(MatchingAlgorithmResource::from_type(
        MatchingAlgorithmType::FirstFit,
    ));
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(SimSnapshotConfig::default());
    world.insert_resource(SimSnapshots::default());
    world.insert_resource(StatusLogConfig { interval_days: 0 });
    world
}

/// Spawns `worker` at the origin and appends it to the roster.
pub fn spawn_worker(world: &mut World, worker: Worker) -> Entity {
    let entity = world.spawn((worker, GridPosition::default())).id();
    world.resource_mut::<AgentRoster>().workers.push(entity);
    entity
}

/// Spawns `company` with zeroed financials and appends it to the roster.
pub fn spawn_company(world: &mut World, company: Company) -> Entity {
    let entity = world
        .spawn((company, CompanyFinancials::default(), GridPosition::default()))
        .id();
    world.resource_mut::<AgentRoster>().companies.push(entity);
    entity
}

/// A company of the given grade and scale with mid-range occupancy and price.
pub fn company_with(id: u32, level: u8, scale: u8) -> Company {
    Company::new(id, level, scale_profile(scale), 0.6, 3000)
}

/// Binds `worker` to `company` as an employee with `work_days` of tenure.
pub fn employ(world: &mut World, worker: Entity, company: Entity, work_days: u32) {
    if let Some(mut w) = world.get_mut::<Worker>(worker) {
        w.get_hired(company);
        w.work_days = work_days;
    }
    if let Some(mut c) = world.get_mut::<Company>(company) {
        c.hire(worker);
    }
}

/// Every violated market invariant, as readable messages.
///
/// Checks the frame bound, the employer/state rule, and that both sides of
/// each worker–company link agree.
pub fn market_invariant_violations(world: &World) -> Vec<String> {
    let mut violations = Vec::new();
    let roster = world.resource::<AgentRoster>();

    for &company_entity in &roster.companies {
        let Some(company) = world.get::<Company>(company_entity) else {
            violations.push(format!("company {company_entity:?} missing"));
            continue;
        };
        if company.occupied_slots() > company.frame {
            violations.push(format!(
                "company {} holds {} of {} slots",
                company.id,
                company.occupied_slots(),
                company.frame
            ));
        }
        for (members, expected) in [
            (&company.applicants, WorkerState::AwaitingResult),
            (&company.employees, WorkerState::Employed),
        ] {
            for member in members {
                match world.get::<Worker>(*member) {
                    Some(w) if w.state == expected && w.employer == Some(company_entity) => {}
                    Some(w) => violations.push(format!(
                        "company {} lists worker {} in state {:?} with employer {:?}",
                        company.id, w.id, w.state, w.employer
                    )),
                    None => violations.push(format!("company {} lists a missing worker", company.id)),
                }
            }
        }
    }

    for &worker_entity in &roster.workers {
        let Some(worker) = world.get::<Worker>(worker_entity) else {
            violations.push(format!("worker {worker_entity:?} missing"));
            continue;
        };
        if !worker.is_consistent() {
            violations.push(format!(
                "worker {} in state {:?} has employer {:?}",
                worker.id, worker.state, worker.employer
            ));
        }
        if let Some(company) = worker.employer.and_then(|e| world.get::<Company>(e)) {
            let listed = match worker.state {
                WorkerState::AwaitingResult => company.applicants.contains(&worker_entity),
                WorkerState::Employed => company.employees.contains(&worker_entity),
                _ => false,
            };
            if !listed {
                violations.push(format!(
                    "worker {} not listed by company {}",
                    worker.id, company.id
                ));
            }
        }
    }

    violations
}
