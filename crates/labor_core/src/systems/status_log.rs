//! Periodic market status report as a structured log line.

use bevy_ecs::prelude::{Query, Res};
use tracing::info;

use crate::clock::SimulationClock;
use crate::ecs::{AgentRoster, Worker};
use crate::telemetry::{MarketCounts, SimTelemetry, StatusLogConfig};

pub fn status_log_due(clock: &SimulationClock, config: &StatusLogConfig) -> bool {
    config.interval_days > 0 && clock.has_started() && clock.now() % config.interval_days == 0
}

/// Periodic market status line.
pub fn status_log_system(
    clock: Res<SimulationClock>,
    config: Res<StatusLogConfig>,
    roster: Res<AgentRoster>,
    telemetry: Res<SimTelemetry>,
    workers: Query<&Worker>,
) {
    if !status_log_due(&clock, &config) {
        return;
    }
    let now = clock.now();

    let mut counts = MarketCounts::default();
    for worker in roster.workers.iter().filter_map(|e| workers.get(*e).ok()) {
        counts.add_worker(worker.state);
    }
    let Some(latest) = telemetry.records.last() else {
        return;
    };

    info!(
        day = now,
        employed = counts.workers_employed,
        unemployed = counts.workers_unemployed,
        job_seeking = counts.workers_job_seeking,
        awaiting_result = counts.workers_awaiting_result,
        gathering = counts.workers_gathering,
        employment_rate = latest.employment_rate,
        total_profit = latest.total_profit,
        "market status"
    );
}
