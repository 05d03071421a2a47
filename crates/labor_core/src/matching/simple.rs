use bevy_ecs::prelude::Entity;
use rand::seq::SliceRandom;
use rand::RngCore;

use super::algorithm::MatchingAlgorithm;

/// Uniform random choice among the candidate set.
///
/// Consumes exactly one draw from the shared stream per matched worker.
#[derive(Debug, Default)]
pub struct UniformRandomMatching;

impl MatchingAlgorithm for UniformRandomMatching {
    fn choose_company(
        &self,
        _worker: Entity,
        candidates: &[Entity],
        rng: &mut dyn RngCore,
    ) -> Option<Entity> {
        candidates.choose(rng).copied()
    }
}

/// First candidate in roster order.
///
/// Deterministic and draw-free; useful as a baseline and for tests that need
/// to know which company a worker lands at.
#[derive(Debug, Default)]
pub struct FirstFitMatching;

impl MatchingAlgorithm for FirstFitMatching {
    fn choose_company(
        &self,
        _worker: Entity,
        candidates: &[Entity],
        _rng: &mut dyn RngCore,
    ) -> Option<Entity> {
        candidates.first().copied()
    }
}
