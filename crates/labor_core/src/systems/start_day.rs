//! First system of every day: advance the clock and reset the day's counters.

use bevy_ecs::prelude::ResMut;

use crate::clock::SimulationClock;
use crate::telemetry::SimTelemetry;

/// Opens a new day: advances the day counter and resets the day's counters.
pub fn start_day_system(mut clock: ResMut<SimulationClock>, mut telemetry: ResMut<SimTelemetry>) {
    clock.advance();
    telemetry.begin_day();
}
