use serde::{Deserialize, Serialize};

use crate::clock::DAYS_PER_YEAR;
use crate::error::ConfigError;
use crate::matching::MatchingAlgorithmType;
use crate::turnover::TurnoverTable;

/// Default market size: one applicant slot per day.
const DEFAULT_WORKER_COUNT: usize = 360;
const DEFAULT_COMPANY_COUNT: usize = 10;

/// Default interval for periodic snapshots (days).
const DEFAULT_SNAPSHOT_INTERVAL_DAYS: u64 = 30;
const DEFAULT_MAX_SNAPSHOTS: usize = 64;

/// Default interval for the periodic status log line (days).
const DEFAULT_STATUS_LOG_INTERVAL_DAYS: u64 = 60;

/// Parameters for building a simulation scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub worker_count: usize,
    pub company_count: usize,
    /// Seed for the shared random stream; 0 when absent.
    pub seed: Option<u64>,
    pub matching_algorithm: MatchingAlgorithmType,
    pub snapshot_interval_days: u64,
    /// 0 disables snapshot capture.
    pub max_snapshots: usize,
    /// 0 disables the periodic status log.
    pub status_log_interval_days: u64,
    /// Replaces the built-in turnover hazards when set.
    pub turnover_table: Option<TurnoverTable>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            company_count: DEFAULT_COMPANY_COUNT,
            seed: None,
            matching_algorithm: MatchingAlgorithmType::default(),
            snapshot_interval_days: DEFAULT_SNAPSHOT_INTERVAL_DAYS,
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
            status_log_interval_days: DEFAULT_STATUS_LOG_INTERVAL_DAYS,
            turnover_table: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_company_count(mut self, company_count: usize) -> Self {
        self.company_count = company_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_matching_algorithm(mut self, algorithm: MatchingAlgorithmType) -> Self {
        self.matching_algorithm = algorithm;
        self
    }

    /// Capture a snapshot every `interval_days`, keeping at most `max_snapshots`.
    pub fn with_snapshots(mut self, interval_days: u64, max_snapshots: usize) -> Self {
        self.snapshot_interval_days = interval_days;
        self.max_snapshots = max_snapshots;
        self
    }

    pub fn with_status_log_interval_days(mut self, interval_days: u64) -> Self {
        self.status_log_interval_days = interval_days;
        self
    }

    pub fn with_turnover_table(mut self, table: TurnoverTable) -> Self {
        self.turnover_table = Some(table);
        self
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == 0 {
            return Err(ConfigError::NonPositiveWorkerCount);
        }
        if self.company_count == 0 {
            return Err(ConfigError::NonPositiveCompanyCount);
        }
        agent_id_limit(self.worker_count)?;
        agent_id_limit(self.company_count)?;
        if self.max_snapshots > 0 && self.snapshot_interval_days == 0 {
            return Err(ConfigError::ZeroSnapshotInterval);
        }
        if let Some((kind, probability)) = self
            .turnover_table
            .as_ref()
            .and_then(TurnoverTable::first_invalid_rate)
        {
            return Err(ConfigError::InvalidTurnoverProbability {
                kind: kind.to_string(),
                probability,
            });
        }
        Ok(())
    }
}

/// Agent ids are `u32`; returns the exclusive upper bound for `count` agents.
pub(crate) fn agent_id_limit(count: usize) -> Result<u32, ConfigError> {
    u32::try_from(count).map_err(|_| ConfigError::AgentCountOverflow { count })
}

/// Named market sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioPreset {
    /// 360 workers, 10 companies, 120 days, seed 42.
    Standard,
    /// 50 workers, 5 companies, 30 days.
    Demo,
    /// 3600 workers, 100 companies, one year.
    Research,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::Standard,
        ScenarioPreset::Demo,
        ScenarioPreset::Research,
    ];

    pub fn params(self) -> ScenarioParams {
        let (workers, companies) = match self {
            ScenarioPreset::Standard => (360, 10),
            ScenarioPreset::Demo => (50, 5),
            ScenarioPreset::Research => (3600, 100),
        };
        let params = ScenarioParams::default()
            .with_worker_count(workers)
            .with_company_count(companies);
        match self {
            ScenarioPreset::Standard => params.with_seed(42),
            _ => params,
        }
    }

    pub fn periods(self) -> u64 {
        match self {
            ScenarioPreset::Standard => 120,
            ScenarioPreset::Demo => 30,
            ScenarioPreset::Research => DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::WorkerKind;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ScenarioParams::default().validate(), Ok(()));
        for preset in ScenarioPreset::ALL {
            assert_eq!(preset.params().validate(), Ok(()));
        }
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(
            ScenarioParams::default().with_worker_count(0).validate(),
            Err(ConfigError::NonPositiveWorkerCount)
        );
        assert_eq!(
            ScenarioParams::default().with_company_count(0).validate(),
            Err(ConfigError::NonPositiveCompanyCount)
        );
    }

    #[test]
    fn snapshot_interval_must_be_positive_when_enabled() {
        assert_eq!(
            ScenarioParams::default().with_snapshots(0, 4).validate(),
            Err(ConfigError::ZeroSnapshotInterval)
        );
        assert_eq!(ScenarioParams::default().with_snapshots(0, 0).validate(), Ok(()));
    }

    #[test]
    fn turnover_override_is_checked() {
        let params = ScenarioParams::default()
            .with_turnover_table(TurnoverTable::default().with_rate(WorkerKind::Freeter, 60, -0.1));
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidTurnoverProbability { .. })
        ));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: ScenarioParams =
            serde_json::from_str(r#"{"worker_count": 50, "seed": 7}"#).expect("parse");
        assert_eq!(params.worker_count, 50);
        assert_eq!(params.company_count, DEFAULT_COMPANY_COUNT);
        assert_eq!(params.seed_or_default(), 7);
        assert_eq!(params.matching_algorithm, MatchingAlgorithmType::UniformRandom);
    }

    #[test]
    fn presets_match_market_sizes() {
        let demo = ScenarioPreset::Demo.params();
        assert_eq!((demo.worker_count, demo.company_count), (50, 5));
        assert_eq!(ScenarioPreset::Demo.periods(), 30);
        assert_eq!(ScenarioPreset::Research.params().worker_count, 3600);
        assert_eq!(ScenarioPreset::Standard.periods(), 120);
        assert_eq!(ScenarioPreset::Research.periods(), DAYS_PER_YEAR);
    }

    #[test]
    fn standard_preset_is_reproducible_by_default() {
        assert_eq!(ScenarioPreset::Standard.params().seed, Some(42));
        assert_eq!(ScenarioPreset::Standard.params().seed_or_default(), 42);
        assert_eq!(ScenarioPreset::Demo.params().seed, None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn counts_beyond_agent_id_range_are_rejected() {
        let too_many = u32::MAX as usize + 1;
        assert_eq!(
            ScenarioParams::default().with_worker_count(too_many).validate(),
            Err(ConfigError::AgentCountOverflow { count: too_many })
        );
        assert_eq!(
            ScenarioParams::default().with_company_count(too_many).validate(),
            Err(ConfigError::AgentCountOverflow { count: too_many })
        );
        assert_eq!(agent_id_limit(u32::MAX as usize), Ok(u32::MAX));
    }
}
