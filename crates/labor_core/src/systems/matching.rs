//! Daily matching pass: runs once per day before any agent steps.
//!
//! Builds the day's applicant batch, then walks it in order. Each worker picks
//! among the companies that have room and admit its skill level; capacity taken
//! by an earlier worker is visible to later ones.

use bevy_ecs::prelude::{Entity, Query, Res, ResMut};
use tracing::trace;

use crate::clock::SimulationClock;
use crate::ecs::{AgentRoster, Company, Worker, WorkerState};
use crate::matching::{
    daily_applicant_quota, is_returning_seeker, sample_new_applicants, ApplicantBatch,
    MatchingAlgorithmResource,
};
use crate::rng::SimRng;
use crate::telemetry::SimTelemetry;

/// Builds the batch: quota-capped sample of never-applied workers, then every
/// returning seeker. Draws from `rng` only when the unemployed pool exceeds
/// the quota.
pub fn build_applicant_batch(
    roster: &AgentRoster,
    workers: &Query<&mut Worker>,
    rng: &mut SimRng,
) -> ApplicantBatch {
    let mut unemployed = Vec::new();
    let mut returning_seekers = Vec::new();
    for &entity in &roster.workers {
        let Ok(worker) = workers.get(entity) else {
            continue;
        };
        if worker.state == WorkerState::Unemployed {
            unemployed.push(entity);
        } else if is_returning_seeker(worker) {
            returning_seekers.push(entity);
        }
    }

    let quota = daily_applicant_quota(roster.workers.len());
    ApplicantBatch {
        new_applicants: sample_new_applicants(unemployed, quota, rng),
        returning_seekers,
    }
}

/// Companies, in roster order, that `worker_level` could apply to right now.
fn candidate_companies(
    roster: &AgentRoster,
    companies: &Query<&mut Company>,
    worker_level: u8,
) -> Vec<Entity> {
    roster
        .companies
        .iter()
        .copied()
        .filter(|entity| {
            companies.get(*entity).is_ok_and(|company| {
                company.can_accept_applicant() && company.admits_skill_level(worker_level)
            })
        })
        .collect()
}

pub fn daily_matching_system(
    clock: Res<SimulationClock>,
    roster: Res<AgentRoster>,
    algorithm: Res<MatchingAlgorithmResource>,
    mut rng: ResMut<SimRng>,
    mut telemetry: ResMut<SimTelemetry>,
    mut workers: Query<&mut Worker>,
    mut companies: Query<&mut Company>,
) {
    let rng: &mut SimRng = &mut rng;
    let batch = build_applicant_batch(&roster, &workers, rng);

    for worker_entity in batch.iter() {
        let Ok(level) = workers.get(worker_entity).map(|w| w.level) else {
            continue;
        };
        let candidates = candidate_companies(&roster, &companies, level);
        if candidates.is_empty() {
            continue;
        }
        let Some(company_entity) = algorithm.choose_company(worker_entity, &candidates, rng)
        else {
            continue;
        };

        let accepted = companies
            .get_mut(company_entity)
            .is_ok_and(|mut company| company.accept_applicant(worker_entity));
        if !accepted {
            continue;
        }
        if let Ok(mut worker) = workers.get_mut(worker_entity) {
            worker.apply_to_company(company_entity, rng);
            trace!(
                day = clock.now(),
                worker = worker.id,
                wait_days = worker.wait_days,
                "worker applied"
            );
        }
        telemetry.today.applications += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economics::scale_profile;
    use crate::ecs::WorkerKind;
    use crate::matching::FirstFitMatching;
    use bevy_ecs::prelude::{Schedule, World};

    fn world_with(workers: Vec<Worker>, companies: Vec<Company>) -> World {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(SimRng::seeded(9));
        world.insert_resource(SimTelemetry::default());
        world.insert_resource(MatchingAlgorithmResource::new(Box::new(FirstFitMatching)));
        let mut roster = AgentRoster::default();
        for worker in workers {
            roster.workers.push(world.spawn(worker).id());
        }
        for company in companies {
            roster.companies.push(world.spawn(company).id());
        }
        world.insert_resource(roster);
        world
    }

    fn run_matching(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(daily_matching_system);
        schedule.run(world);
    }

    #[test]
    fn unemployed_worker_applies_to_compatible_company() {
        let mut world = world_with(
            vec![Worker::new(0, WorkerKind::Freeter, 3)],
            vec![Company::new(0, 4, scale_profile(1), 0.5, 1000)],
        );
        run_matching(&mut world);

        let roster = world.resource::<AgentRoster>().clone();
        let worker = world.get::<Worker>(roster.workers[0]).expect("worker");
        assert_eq!(worker.state, WorkerState::AwaitingResult);
        assert_eq!(worker.employer, Some(roster.companies[0]));
        let company = world.get::<Company>(roster.companies[0]).expect("company");
        assert_eq!(company.applicants, vec![roster.workers[0]]);
        assert_eq!(world.resource::<SimTelemetry>().today.applications, 1);
    }

    #[test]
    fn worker_below_skill_gate_stays_unemployed() {
        let mut world = world_with(
            vec![Worker::new(0, WorkerKind::Foreigner, 1)],
            vec![Company::new(0, 5, scale_profile(4), 0.5, 1000)],
        );
        run_matching(&mut world);

        let roster = world.resource::<AgentRoster>().clone();
        let worker = world.get::<Worker>(roster.workers[0]).expect("worker");
        assert_eq!(worker.state, WorkerState::Unemployed);
        assert_eq!(worker.employer, None);
    }

    #[test]
    fn later_returning_seeker_sees_consumed_capacity() {
        let mut first = Worker::new(0, WorkerKind::Student, 4);
        first.state = WorkerState::JobSeeking;
        first.elapsed_days = 2;
        let mut second = Worker::new(1, WorkerKind::Student, 4);
        second.state = WorkerState::JobSeeking;
        second.elapsed_days = 5;
        let mut world = world_with(
            vec![first, second],
            vec![Company::new(0, 2, scale_profile(1), 0.5, 1000)],
        );
        run_matching(&mut world);

        let roster = world.resource::<AgentRoster>().clone();
        let first = world.get::<Worker>(roster.workers[0]).expect("first");
        let second = world.get::<Worker>(roster.workers[1]).expect("second");
        assert_eq!(first.state, WorkerState::AwaitingResult);
        assert_eq!(second.state, WorkerState::JobSeeking);
        let company = world.get::<Company>(roster.companies[0]).expect("company");
        assert_eq!(company.occupied_slots(), 1);
    }

    #[test]
    fn only_one_new_applicant_per_day_for_small_markets() {
        let workers = (0..5).map(|id| Worker::new(id, WorkerKind::Freeter, 6)).collect();
        let mut world = world_with(workers, vec![Company::new(0, 1, scale_profile(4), 0.5, 1000)]);
        run_matching(&mut world);

        let applied = world
            .query::<&Worker>()
            .iter(&world)
            .filter(|w| w.state == WorkerState::AwaitingResult)
            .count();
        assert_eq!(applied, 1);
    }
}
