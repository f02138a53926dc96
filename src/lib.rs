//! # CasJobs Client
//!
//! A blocking client for the SDSS CasJobs batch query web service. Each
//! method maps onto one operation of the service's HTTP GET interface
//! (`<endpoint>/<Operation>?<params>`) and returns the response text, or an
//! integer for the operations that answer with a job id or status code.
//!
//! ## Features
//!
//! - **Queries**: quick runs and batch job submission
//! - **Jobs**: status, cancellation, listing and extraction
//! - **Service state**: queue listing and suspend/wake requests
//! - **Config files**: `key=value` settings, see [`Settings`]
//!
//! The client keeps mutable settings and performs blocking I/O. It does not
//! synchronize access; use one client per thread.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casjobs_client::{CasJobs, JobStatus};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = CasJobs::new();
//!     client.load_config("CasJobs.config")?;
//!
//!     let job_id = client.submit_job("SELECT TOP 10 objID FROM PhotoObj", Some("DR13"), Some("sample"), None)?;
//!     let code = client.get_job_status(job_id)?;
//!     println!("Job {}: {:?}", job_id, JobStatus::from_code(code));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod records;
pub mod service;

pub use config::{Password, Settings};
pub use error::{CasJobsError, Result};
pub use records::{Job, Queue};
pub use service::{CasJobs, DataTarget, HttpTransport, JobStatus, OutputFormat, ServiceState, Transport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::service::{CasJobs, DataTarget, JobStatus, OutputFormat, ServiceState};
    pub use crate::records::{Job, Queue};
    pub use crate::error::{CasJobsError, Result};
}
