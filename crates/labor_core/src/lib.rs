pub mod clock;
pub mod distributions;
pub mod economics;
pub mod ecs;
pub mod error;
pub mod matching;
pub mod rng;
pub mod runner;
pub mod scenario;
pub mod simulation;
pub mod systems;
pub mod telemetry;
pub mod turnover;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::ConfigError;
pub use scenario::{ScenarioParams, ScenarioPreset};
pub use simulation::LaborMarketSimulation;
pub use telemetry::{DailyRecord, SimulationSummary};
