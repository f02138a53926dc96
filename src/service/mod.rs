//! CasJobs web service client

mod catalog;
mod client;
mod jobs;
mod state;
mod transport;

pub use catalog::{DataTarget, JobStatus, OutputFormat, ServiceState};
pub use client::CasJobs;
pub use transport::{HttpTransport, Transport};

/// Base URL of the SDSS CasJobs job service
pub const DEFAULT_SERVICE_ENDPOINT: &str = "http://skyserver.sdss3.org/casjobs/services/jobs.asmx";

/// File name looked up by [`CasJobs::load_default_config`]
pub const CONFIG_FILE: &str = "CasJobs.config";

/// Data release targets accepted by the service, oldest first
pub const DATA_TARGETS: [DataTarget; 5] = [
    DataTarget::Dr9,
    DataTarget::Dr10,
    DataTarget::Dr11,
    DataTarget::Dr12,
    DataTarget::Dr13,
];

/// Output formats understood by extract jobs
pub const FMT_TYPES: [OutputFormat; 4] = [
    OutputFormat::Csv,
    OutputFormat::Fits,
    OutputFormat::Dataset,
    OutputFormat::VoTable,
];

/// Job status codes as returned by `GetJobStatus`
pub const JOB_STATUS: [(i64, JobStatus); 6] = [
    (0, JobStatus::Ready),
    (1, JobStatus::Started),
    (2, JobStatus::Canceling),
    (3, JobStatus::Cancelled),
    (4, JobStatus::Failed),
    (5, JobStatus::Finished),
];

/// Service state labels
pub const STATE_RUNNING: &str = "RUNNING";
pub const STATE_SUSPENDING: &str = "SUSPENDING";
pub const STATE_SUSPENDED: &str = "SUSPENDED";
pub const STATE_WAKING: &str = "WAKING";
