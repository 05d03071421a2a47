#![allow(dead_code)]

pub mod entities;
pub mod schedule;
pub mod world;

use bevy_ecs::prelude::World;
use labor_core::test_helpers::market_invariant_violations;

/// Panics with every violated market invariant.
pub fn assert_market_invariants(world: &World) {
    let violations = market_invariant_violations(world);
    assert!(violations.is_empty(), "invariant violations: {violations:#?}");
}
