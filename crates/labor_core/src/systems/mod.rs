//! Systems of the daily schedule. The chain order lives in [`crate::runner`].

pub mod company_step;
pub mod matching;
pub mod start_day;
pub mod statistics;
pub mod status_log;
pub mod telemetry_snapshot;
pub mod worker_step;
