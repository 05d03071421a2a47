#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use labor_core::runner::{run_day, run_days, run_days_with_hook, simulation_schedule};

/// Owns a reusable daily `Schedule` so tests can step day by day.
pub struct ScheduleRunner {
    schedule: Schedule,
}

impl Default for ScheduleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRunner {
    pub fn new() -> Self {
        Self {
            schedule: simulation_schedule(),
        }
    }

    /// Run one day, returning its index.
    pub fn run_day(&mut self, world: &mut World) -> u64 {
        run_day(world, &mut self.schedule)
    }

    pub fn run_days(&mut self, world: &mut World, days: u64) -> u64 {
        run_days(world, &mut self.schedule, days)
    }

    /// Run `days` days, calling `check` with the world after each one.
    pub fn run_days_checked<F>(&mut self, world: &mut World, days: u64, mut check: F)
    where
        F: FnMut(&World, u64),
    {
        run_days_with_hook(world, &mut self.schedule, days, |w, day| check(w, day));
    }
}
