//! Simulation runner: one schedule pass per simulated day.
//!
//! The day's phases run as a chained schedule on the single-threaded executor,
//! so the order below is also the order in which random draws are consumed:
//! start of day, matching, worker steps, company steps, statistics, then the
//! optional snapshot and status log.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::{ExecutorKind, IntoSystemConfigs};

use crate::clock::SimulationClock;
use crate::systems::{
    company_step::company_step_system,
    matching::daily_matching_system,
    start_day::start_day_system,
    statistics::record_daily_statistics_system,
    status_log::{status_log_due, status_log_system},
    telemetry_snapshot::{capture_snapshot_system, snapshot_due},
    worker_step::worker_step_system,
};
use crate::telemetry::{SimSnapshotConfig, SimSnapshots, StatusLogConfig};

/// Condition: telemetry snapshot interval has elapsed.
fn should_capture_snapshot(
    clock: Option<Res<SimulationClock>>,
    config: Option<Res<SimSnapshotConfig>>,
    snapshots: Option<Res<SimSnapshots>>,
) -> bool {
    let (Some(clock), Some(config), Some(snapshots)) = (clock, config, snapshots) else {
        return false;
    };
    snapshot_due(clock.now(), &config, &snapshots)
}

fn should_log_status(
    clock: Option<Res<SimulationClock>>,
    config: Option<Res<StatusLogConfig>>,
) -> bool {
    let (Some(clock), Some(config)) = (clock, config) else {
        return false;
    };
    status_log_due(&clock, &config)
}

/// Builds the daily schedule.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            start_day_system,
            daily_matching_system,
            worker_step_system,
            company_step_system,
            record_daily_statistics_system,
            capture_snapshot_system.run_if(should_capture_snapshot),
            status_log_system.run_if(should_log_status),
        )
            .chain(),
    );
    schedule
}

/// Runs one simulated day. Returns the index of the day that ran.
pub fn run_day(world: &mut World, schedule: &mut Schedule) -> u64 {
    schedule.run(world);
    world.resource::<SimulationClock>().now()
}

/// Runs one simulated day and invokes `hook` after the schedule completes.
pub fn run_day_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> u64
where
    F: FnMut(&World, u64),
{
    let day = run_day(world, schedule);
    hook(world, day);
    day
}

/// Runs `days` simulated days. Returns the number of days executed.
pub fn run_days(world: &mut World, schedule: &mut Schedule, days: u64) -> u64 {
    for _ in 0..days {
        run_day(world, schedule);
    }
    days
}

/// Runs `days` simulated days and invokes `hook` after each one.
pub fn run_days_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    days: u64,
    mut hook: F,
) -> u64
where
    F: FnMut(&World, u64),
{
    for _ in 0..days {
        run_day_with_hook(world, schedule, &mut hook);
    }
    days
}
