pub mod algorithm;
pub mod batch;
pub mod simple;
pub mod types;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

pub use algorithm::MatchingAlgorithm;
pub use batch::{daily_applicant_quota, is_returning_seeker, sample_new_applicants};
pub use simple::{FirstFitMatching, UniformRandomMatching};
pub use types::ApplicantBatch;

/// Which candidate-choice rule the daily matching pass uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingAlgorithmType {
    #[default]
    UniformRandom,
    FirstFit,
}

impl MatchingAlgorithmType {
    pub fn label(self) -> &'static str {
        match self {
            MatchingAlgorithmType::UniformRandom => "uniform_random",
            MatchingAlgorithmType::FirstFit => "first_fit",
        }
    }
}

/// Resource wrapper for the matching algorithm trait object.
#[derive(Resource)]
pub struct MatchingAlgorithmResource(pub Box<dyn MatchingAlgorithm>);

impl MatchingAlgorithmResource {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }

    pub fn from_type(kind: MatchingAlgorithmType) -> Self {
        match kind {
            MatchingAlgorithmType::UniformRandom => Self::new(Box::new(UniformRandomMatching)),
            MatchingAlgorithmType::FirstFit => Self::new(Box::new(FirstFitMatching)),
        }
    }
}

impl std::ops::Deref for MatchingAlgorithmResource {
    type Target = dyn MatchingAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
