//! Daily applicant selection.

use bevy_ecs::prelude::Entity;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock::DAYS_PER_YEAR;
use crate::ecs::{Worker, WorkerState};

/// One new applicant per this many workers per day (at least one).
pub const APPLICANT_QUOTA_DIVISOR: usize = DAYS_PER_YEAR as usize;

/// Job seekers re-enter the batch once `elapsed_days` exceeds this.
pub const RETURNING_SEEKER_MIN_ELAPSED_DAYS: u32 = 1;

pub fn daily_applicant_quota(total_workers: usize) -> usize {
    (total_workers / APPLICANT_QUOTA_DIVISOR).max(1)
}

/// Samples up to `quota` workers without replacement. When the pool fits in
/// the quota it is returned as is, in order, without touching the stream.
pub fn sample_new_applicants<R: Rng + ?Sized>(
    unemployed: Vec<Entity>,
    quota: usize,
    rng: &mut R,
) -> Vec<Entity> {
    if unemployed.len() > quota {
        unemployed.choose_multiple(rng, quota).copied().collect()
    } else {
        unemployed
    }
}

pub fn is_returning_seeker(worker: &Worker) -> bool {
    worker.state == WorkerState::JobSeeking
        && worker.elapsed_days > RETURNING_SEEKER_MIN_ELAPSED_DAYS
}
