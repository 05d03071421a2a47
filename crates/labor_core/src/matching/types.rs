use bevy_ecs::prelude::Entity;

/// The workers that try to apply on a given day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplicantBatch {
    /// Sampled from never-applied workers, capped by the daily quota.
    pub new_applicants: Vec<Entity>,
    /// Job seekers past their gathering period, uncapped.
    pub returning_seekers: Vec<Entity>,
}

impl ApplicantBatch {
    /// New applicants first, then returning seekers.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.new_applicants
            .iter()
            .chain(self.returning_seekers.iter())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.new_applicants.len() + self.returning_seekers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
