use bevy_ecs::prelude::Entity;
use rand::RngCore;

/// Chooses which company an applicant applies to.
///
/// The daily matching pass builds the candidate set (capacity-available,
/// skill-compatible companies, in roster order) and hands it to the
/// algorithm. Candidates are never empty when this is called.
///
/// # Examples
///
/// ```rust
/// use bevy_ecs::prelude::Entity;
/// use labor_core::matching::{MatchingAlgorithm, FirstFitMatching};
/// use labor_core::rng::SimRng;
///
/// let mut rng = SimRng::seeded(1);
/// let candidates = [Entity::from_raw(3), Entity::from_raw(5)];
/// let chosen = FirstFitMatching.choose_company(Entity::from_raw(1), &candidates, &mut rng);
/// assert_eq!(chosen, Some(Entity::from_raw(3)));
/// ```
pub trait MatchingAlgorithm: Send + Sync {
    /// Pick one of `candidates` for `worker`, or `None` to leave the worker
    /// unmatched today.
    fn choose_company(
        &self,
        worker: Entity,
        candidates: &[Entity],
        rng: &mut dyn RngCore,
    ) -> Option<Entity>;
}
