use bevy_ecs::prelude::Resource;

/// Simulated days in one year of the labor market.
pub const DAYS_PER_YEAR: u64 = 360;

/// Day counter for the daily schedule. Day 0 means no day has run yet; the
/// first scheduled day is day 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Resource)]
pub struct SimulationClock {
    day: u64,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.day
    }

    /// Moves to the next day and returns its index.
    pub fn advance(&mut self) -> u64 {
        self.day += 1;
        self.day
    }

    pub fn has_started(&self) -> bool {
        self.day > 0
    }
}
