#![allow(dead_code)]

use bevy_ecs::prelude::{Entity, World};
use labor_core::ecs::{Company, Worker, WorkerKind, WorkerState};
use labor_core::test_helpers::{company_with, employ, spawn_company, spawn_worker};

/// Builder for worker fixtures.
#[derive(Clone, Debug)]
pub struct WorkerBuilder {
    id: u32,
    kind: WorkerKind,
    level: u8,
    state: WorkerState,
    elapsed_days: u32,
}

impl WorkerBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            kind: WorkerKind::Freeter,
            level: 3,
            state: WorkerState::Unemployed,
            elapsed_days: 0,
        }
    }

    pub fn kind(mut self, kind: WorkerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// A job seeker that re-enters the daily batch.
    pub fn seeking(mut self) -> Self {
        self.state = WorkerState::JobSeeking;
        self.elapsed_days = 2;
        self
    }

    pub fn build(&self) -> Worker {
        let mut worker = Worker::new(self.id, self.kind, self.level);
        worker.state = self.state;
        worker.elapsed_days = self.elapsed_days;
        worker
    }

    pub fn spawn(&self, world: &mut World) -> Entity {
        spawn_worker(world, self.build())
    }

    /// Spawns the worker already employed at `company` with `work_days` tenure.
    pub fn spawn_employed(&self, world: &mut World, company: Entity, work_days: u32) -> Entity {
        let worker = spawn_worker(world, Worker::new(self.id, self.kind, self.level));
        employ(world, worker, company, work_days);
        worker
    }
}

/// Spawns a company of the given grade and scale.
pub fn spawn_company_with(world: &mut World, id: u32, level: u8, scale: u8) -> Entity {
    spawn_company(world, company_with(id, level, scale))
}

/// Spawns a company whose frame is overridden to `frame`.
pub fn spawn_company_with_frame(world: &mut World, id: u32, level: u8, frame: usize) -> Entity {
    let mut company = company_with(id, level, 1);
    company.frame = frame;
    spawn_company(world, company)
}

pub fn worker(world: &World, entity: Entity) -> Worker {
    world.get::<Worker>(entity).expect("worker").clone()
}

pub fn company(world: &World, entity: Entity) -> Company {
    world.get::<Company>(entity).expect("company").clone()
}
