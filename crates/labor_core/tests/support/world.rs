#![allow(dead_code)]

use bevy_ecs::prelude::World;
use labor_core::matching::{MatchingAlgorithmResource, MatchingAlgorithmType};
use labor_core::telemetry::SimSnapshotConfig;
use labor_core::test_helpers::create_test_world;
use labor_core::turnover::TurnoverTable;

/// Builder configuration for reproducible hand-built markets.
#[derive(Clone, Debug)]
pub struct TestWorldConfig {
    pub seed: u64,
    pub matching: MatchingAlgorithmType,
    pub turnover: TurnoverTable,
    pub snapshot_interval_days: u64,
}

impl Default for TestWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            matching: MatchingAlgorithmType::FirstFit,
            turnover: TurnoverTable::default(),
            snapshot_interval_days: 1,
        }
    }
}

/// Populates a world with the resources the daily schedule reads.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: TestWorldConfig,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_matching(mut self, matching: MatchingAlgorithmType) -> Self {
        self.config.matching = matching;
        self
    }

    pub fn with_turnover(mut self, turnover: TurnoverTable) -> Self {
        self.config.turnover = turnover;
        self
    }

    pub fn build(self) -> World {
        let mut world = create_test_world(self.config.seed);
        world.insert_resource(MatchingAlgorithmResource::from_type(self.config.matching));
        world.insert_resource(self.config.turnover);
        world.insert_resource(SimSnapshotConfig {
            interval_days: self.config.snapshot_interval_days,
            max_snapshots: 8,
        });
        world
    }
}
