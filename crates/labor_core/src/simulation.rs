//! Facade over the ECS world: build once, run any number of days, read results.

use bevy_ecs::prelude::{Schedule, World};
use tracing::info;

use crate::clock::SimulationClock;
use crate::error::ConfigError;
use crate::runner::{run_days, run_days_with_hook, simulation_schedule};
use crate::scenario::{build_scenario, ScenarioParams};
use crate::telemetry::{DailyRecord, SimSnapshots, SimTelemetry, SimulationSummary};

pub struct LaborMarketSimulation {
    world: World,
    schedule: Schedule,
    params: ScenarioParams,
}

impl LaborMarketSimulation {
    /// Validates `params` and builds the initial market.
    pub fn new(params: ScenarioParams) -> Result<Self, ConfigError> {
        let mut world = World::new();
        build_scenario(&mut world, &params)?;
        Ok(Self {
            world,
            schedule: simulation_schedule(),
            params,
        })
    }

    /// Runs `periods` more days. Returns every record accumulated so far,
    /// including those from earlier calls.
    pub fn run(&mut self, periods: u64) -> Result<&[DailyRecord], ConfigError> {
        self.run_with_hook(periods, |_, _| {})
    }

    /// Like [Self::run], invoking `hook` with the world after each day.
    pub fn run_with_hook<F>(&mut self, periods: u64, hook: F) -> Result<&[DailyRecord], ConfigError>
    where
        F: FnMut(&World, u64),
    {
        if periods == 0 {
            return Err(ConfigError::NonPositivePeriods);
        }

        let start_day = self.day();
        info!(
            workers = self.params.worker_count,
            companies = self.params.company_count,
            seed = self.params.seed_or_default(),
            start_day,
            periods,
            "simulation started"
        );
        run_days_with_hook(&mut self.world, &mut self.schedule, periods, hook);

        if let Some(summary) = self.summary() {
            info!(
                day = self.day(),
                employment_rate = summary.final_employment_rate,
                average_wage = summary.final_average_wage,
                total_profit = summary.final_total_profit,
                job_matching_rate = summary.final_job_matching_rate,
                "simulation finished"
            );
        }
        Ok(self.records())
    }

    /// Runs without the start/finish log lines.
    pub fn run_quiet(&mut self, periods: u64) -> Result<&[DailyRecord], ConfigError> {
        if periods == 0 {
            return Err(ConfigError::NonPositivePeriods);
        }
        run_days(&mut self.world, &mut self.schedule, periods);
        Ok(self.records())
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.world.resource::<SimTelemetry>().records
    }

    /// `None` until at least one day has run.
    pub fn summary(&self) -> Option<SimulationSummary> {
        self.world.resource::<SimTelemetry>().summary()
    }

    pub fn telemetry(&self) -> &SimTelemetry {
        self.world.resource::<SimTelemetry>()
    }

    pub fn snapshots(&self) -> &SimSnapshots {
        self.world.resource::<SimSnapshots>()
    }

    /// Index of the last completed day (0 before the first run).
    pub fn day(&self) -> u64 {
        self.world.resource::<SimulationClock>().now()
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
