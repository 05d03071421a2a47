use bevy_ecs::prelude::{Entity, World};
use rand::Rng;
use tracing::debug;

use crate::clock::SimulationClock;
use crate::distributions::AttributeTables;
use crate::economics::scale_profile;
use crate::ecs::{AgentRoster, Company, CompanyFinancials, GridPosition, Worker, WorkerKind};
use crate::error::ConfigError;
use crate::matching::MatchingAlgorithmResource;
use crate::rng::SimRng;
use crate::scenario::params::{agent_id_limit, ScenarioParams};
use crate::telemetry::{SimSnapshotConfig, SimSnapshots, SimTelemetry, StatusLogConfig};
use crate::turnover::TurnoverTable;

/// Samples one worker: kind, level, then grid position.
pub fn sample_worker<R: Rng + ?Sized>(
    id: u32,
    tables: &AttributeTables,
    rng: &mut R,
) -> (Worker, GridPosition) {
    let kind = tables.worker_kinds.sample(rng).unwrap_or(WorkerKind::Freeter);
    let level = rng.gen_range(kind.level_range());
    let position = GridPosition::random(rng);
    (Worker::new(id, kind, level), position)
}

/// Samples one company: level, scale, occupancy, price, then grid position.
pub fn sample_company<R: Rng + ?Sized>(
    id: u32,
    tables: &AttributeTables,
    rng: &mut R,
) -> (Company, GridPosition) {
    let level = tables.company_levels.sample(rng).unwrap_or(1);
    let scale = tables.company_scales.sample(rng).unwrap_or(1);
    let occupancy = tables.occupancies.sample(rng).unwrap_or(0.5);
    let price = tables.prices.sample(rng).unwrap_or(1000);
    let position = GridPosition::random(rng);
    (
        Company::new(id, level, scale_profile(scale), occupancy, price),
        position,
    )
}

/// Validates `params`, inserts the simulation resources and spawns every
/// worker followed by every company.
///
/// All construction draws come from the same stream the daily schedule uses,
/// so a seed fixes both the initial market and its evolution.
pub fn build_scenario(world: &mut World, params: &ScenarioParams) -> Result<(), ConfigError> {
    params.validate()?;
    let worker_ids = agent_id_limit(params.worker_count)?;
    let company_ids = agent_id_limit(params.company_count)?;

    let seed = params.seed_or_default();
    debug!(
        workers = params.worker_count,
        companies = params.company_count,
        seed,
        algorithm = ?params.matching_algorithm,
        "building scenario"
    );

    let mut rng = SimRng::seeded(seed);
    let tables = AttributeTables::default();

    let mut roster = AgentRoster {
        workers: Vec::with_capacity(params.worker_count),
        companies: Vec::with_capacity(params.company_count),
    };
    for id in 0..worker_ids {
        let (worker, position) = sample_worker(id, &tables, &mut rng);
        let entity: Entity = world.spawn((worker, position)).id();
        roster.workers.push(entity);
    }
    for id in 0..company_ids {
        let (company, position) = sample_company(id, &tables, &mut rng);
        let entity = world
            .spawn((company, CompanyFinancials::default(), position))
            .id();
        roster.companies.push(entity);
    }

    world.insert_resource(SimulationClock::default());
    world.insert_resource(rng);
    world.insert_resource(roster);
    world.insert_resource(params.turnover_table.clone().unwrap_or_default());
    world.insert_resource(MatchingAlgorithmResource::from_type(params.matching_algorithm));
    world.insert_resource(SimTelemetry::default());
    world.insert_resource(SimSnapshotConfig {
        interval_days: params.snapshot_interval_days,
        max_snapshots: params.max_snapshots,
    });
    world.insert_resource(SimSnapshots::default());
    world.insert_resource(StatusLogConfig {
        interval_days: params.status_log_interval_days,
    });

    Ok(())
}
