//! Scenario setup: configuration, presets, and spawning of the initial market.

mod build;
mod params;

pub use build::{build_scenario, sample_company, sample_worker};
pub use params::{ScenarioParams, ScenarioPreset};
