//! Closed label sets used by the service

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::CasJobsError;
use super::{DATA_TARGETS, JOB_STATUS, STATE_RUNNING, STATE_SUSPENDED, STATE_SUSPENDING, STATE_WAKING};

/// SDSS data release a query runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTarget {
    #[serde(rename = "DR9")]
    Dr9,
    #[serde(rename = "DR10")]
    Dr10,
    #[serde(rename = "DR11")]
    Dr11,
    #[serde(rename = "DR12")]
    Dr12,
    #[serde(rename = "DR13")]
    Dr13,
}

impl DataTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTarget::Dr9 => "DR9",
            DataTarget::Dr10 => "DR10",
            DataTarget::Dr11 => "DR11",
            DataTarget::Dr12 => "DR12",
            DataTarget::Dr13 => "DR13",
        }
    }
}

impl Default for DataTarget {
    /// The most recent release
    fn default() -> Self {
        DATA_TARGETS[DATA_TARGETS.len() - 1]
    }
}

impl fmt::Display for DataTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataTarget {
    type Err = CasJobsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DATA_TARGETS
            .iter()
            .copied()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| CasJobsError::InvalidTarget(s.to_string()))
    }
}

/// Output format of an extract job
///
/// The service validates formats itself; this list is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    Csv,
    Fits,
    Dataset,
    VoTable,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Fits => "FITS",
            OutputFormat::Dataset => "DATASET",
            OutputFormat::VoTable => "VOTABLE",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job status reported by `GetJobStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Ready,
    Started,
    Canceling,
    Cancelled,
    Failed,
    Finished,
}

impl JobStatus {
    /// Maps a numeric status code, `None` for codes outside 0..=5
    pub fn from_code(code: i64) -> Option<Self> {
        JOB_STATUS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, status)| *status)
    }

    pub fn code(&self) -> i64 {
        JOB_STATUS
            .iter()
            .find(|(_, status)| status == self)
            .map(|(code, _)| *code)
            .unwrap_or(-1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Ready => "READY",
            JobStatus::Started => "STARTED",
            JobStatus::Canceling => "CANCELING",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Failed => "FAILED",
            JobStatus::Finished => "FINISHED",
        }
    }

    /// True once the job can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Cancelled | JobStatus::Failed | JobStatus::Finished)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution state of a server-side service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceState {
    Running,
    Suspending,
    Suspended,
    Waking,
}

impl ServiceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceState::Running => STATE_RUNNING,
            ServiceState::Suspending => STATE_SUSPENDING,
            ServiceState::Suspended => STATE_SUSPENDED,
            ServiceState::Waking => STATE_WAKING,
        }
    }

    /// Only these two states may be requested by a client
    pub fn is_requestable(&self) -> bool {
        matches!(self, ServiceState::Waking | ServiceState::Suspending)
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceState {
    type Err = CasJobsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATE_RUNNING => Ok(ServiceState::Running),
            STATE_SUSPENDING => Ok(ServiceState::Suspending),
            STATE_SUSPENDED => Ok(ServiceState::Suspended),
            STATE_WAKING => Ok(ServiceState::Waking),
            other => Err(CasJobsError::InvalidServiceState(other.to_string())),
        }
    }
}
