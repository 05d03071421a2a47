//! Periodic market snapshots with bounded retention.

use std::collections::BTreeMap;

use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::SimulationClock;
use crate::ecs::{AgentRoster, Company, CompanyFinancials, GridPosition, Worker};
use crate::telemetry::{
    CompanySnapshot, MarketCounts, MarketSnapshot, SimSnapshotConfig, SimSnapshots,
    WorkerSnapshot,
};

/// True when no snapshot exists yet or the configured interval has elapsed.
pub fn snapshot_due(now: u64, config: &SimSnapshotConfig, snapshots: &SimSnapshots) -> bool {
    if config.max_snapshots == 0 || config.interval_days == 0 {
        return false;
    }
    match snapshots.last_snapshot_at {
        None => true,
        Some(last) => now.saturating_sub(last) >= config.interval_days,
    }
}

pub fn capture_snapshot_system(
    clock: Res<SimulationClock>,
    config: Res<SimSnapshotConfig>,
    roster: Res<AgentRoster>,
    mut snapshots: ResMut<SimSnapshots>,
    workers: Query<(&Worker, Option<&GridPosition>)>,
    companies: Query<(&Company, Option<&CompanyFinancials>, Option<&GridPosition>)>,
) {
    let now = clock.now();
    if !snapshot_due(now, &config, &snapshots) {
        return;
    }

    let mut counts = MarketCounts::default();
    let mut workers_by_kind = BTreeMap::new();
    let mut companies_by_level = BTreeMap::new();

    let mut company_snapshots = Vec::with_capacity(roster.companies.len());
    for &entity in &roster.companies {
        let Ok((company, financials, position)) = companies.get(entity) else {
            continue;
        };
        counts.add_company(company.applicants.len(), company.employees.len(), company.frame);
        *companies_by_level.entry(company.level).or_insert(0) += 1;
        let financials = financials.copied().unwrap_or_default();
        company_snapshots.push(CompanySnapshot {
            entity,
            id: company.id,
            level: company.level,
            scale: company.scale,
            frame: company.frame,
            applicants: company.applicants.len(),
            employees: company.employees.len(),
            sales: financials.sales,
            profit: financials.profit,
            position: position.copied().unwrap_or_default(),
        });
    }

    let mut worker_snapshots = Vec::with_capacity(roster.workers.len());
    for &entity in &roster.workers {
        let Ok((worker, position)) = workers.get(entity) else {
            continue;
        };
        counts.add_worker(worker.state);
        *workers_by_kind.entry(worker.kind).or_insert(0) += 1;
        let employer_id = worker
            .employer
            .and_then(|e| companies.get(e).ok())
            .map(|(company, _, _)| company.id);
        worker_snapshots.push(WorkerSnapshot {
            entity,
            id: worker.id,
            kind: worker.kind,
            level: worker.level,
            state: worker.state,
            employer_id,
            work_days: worker.work_days,
            position: position.copied().unwrap_or_default(),
        });
    }

    snapshots.last_snapshot_at = Some(now);
    snapshots.snapshots.push_back(MarketSnapshot {
        day: now,
        counts,
        workers_by_kind,
        companies_by_level,
        workers: worker_snapshots,
        companies: company_snapshots,
    });

    while snapshots.snapshots.len() > config.max_snapshots {
        snapshots.snapshots.pop_front();
    }
}
