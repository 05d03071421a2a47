use thiserror::Error;

/// Rejected configuration. Raised before any simulation step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("worker_count must be positive")]
    NonPositiveWorkerCount,
    #[error("company_count must be positive")]
    NonPositiveCompanyCount,
    #[error("agent count {count} does not fit a 32-bit agent id")]
    AgentCountOverflow { count: usize },
    #[error("periods must be positive")]
    NonPositivePeriods,
    #[error("a seed range must contain at least one seed")]
    NonPositiveSeedCount,
    #[error("snapshot interval must be positive when snapshots are retained")]
    ZeroSnapshotInterval,
    #[error("turnover probability {probability} for {kind} is outside [0, 1]")]
    InvalidTurnoverProbability { kind: String, probability: f64 },
}
