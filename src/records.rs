//! Record shapes returned by the job service
//!
//! These mirror the service's `CJJob` and `CJQueue` types. The client
//! does not parse responses into them yet; they are provided for callers
//! that decode the raw responses themselves.

use serde::{Deserialize, Serialize};
use crate::service::JobStatus;

/// A job as described by `GetJobsJob`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Job {
    #[serde(rename = "JobID")]
    pub job_id: i64,
    pub rows: i64,
    #[serde(rename = "WebServiceID")]
    pub web_service_id: i64,
    pub time_submit: String,
    pub time_start: String,
    pub time_end: String,
    /// Numeric status code, -1 when unknown
    pub status: i64,
    /// Queue id, -1 when unknown
    pub queue: i64,
    pub task_name: String,
    pub output_loc: String,
    pub error: String,
    pub query: String,
    pub context: String,
    #[serde(rename = "Type")]
    pub output_type: String,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            job_id: 0,
            rows: 0,
            web_service_id: 0,
            time_submit: String::new(),
            time_start: String::new(),
            time_end: String::new(),
            status: -1,
            queue: -1,
            task_name: String::new(),
            output_loc: String::new(),
            error: String::new(),
            query: String::new(),
            context: String::new(),
            output_type: String::new(),
        }
    }
}

impl Job {
    /// Typed status, `None` while the code is unknown
    pub fn job_status(&self) -> Option<JobStatus> {
        JobStatus::from_code(self.status)
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.job_status() {
            Some(status) => write!(f, "Job {} (status: {})", self.job_id, status),
            None => write!(f, "Job {} (status: {})", self.job_id, self.status),
        }
    }
}

/// An execution queue and its timeout
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Queue {
    pub context: String,
    pub timeout: String,
}
