//! Error types for the CasJobs client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, CasJobsError>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum CasJobsError {
    /// The config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file exists but could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config line without a `key=value` shape
    #[error("Malformed config line {line}: {content:?}")]
    MalformedConfigLine { line: usize, content: String },

    /// A recognized config key with a value of the wrong type
    #[error("Invalid value {value:?} for config key '{key}'")]
    InvalidConfigValue { key: String, value: String },

    /// Data release target outside the supported list
    #[error("Unknown data release target '{0}'")]
    InvalidTarget(String),

    /// Service state that cannot be requested
    #[error("Service state can be only set to WAKING or SUSPENDING, got '{0}'")]
    InvalidServiceState(String),

    /// Authenticated call attempted before `wsid` and password were set
    #[error("Web service id and password must be set before calling the service")]
    MissingCredentials,

    /// HTTP request errors, including non-2xx responses
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body is not valid UTF-8
    #[error("Response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Response body does not have the expected shape
    #[error("Unexpected response from {operation}: {body:?}")]
    InvalidResponse { operation: String, body: String },
}

impl CasJobsError {
    /// True for failures raised by the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, CasJobsError::Http(_) | CasJobsError::Decode(_))
    }
}
