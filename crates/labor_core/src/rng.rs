//! The single random stream shared by every stochastic draw in a simulation.
//!
//! Draws happen in a fixed logical order: attribute sampling while the
//! scenario is built, then per day applicant sampling, candidate choice with
//! its notification delay, and turnover trials. Each world owns its own
//! stream, so independent simulations never interfere.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone, Resource)]
pub struct SimRng(StdRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
