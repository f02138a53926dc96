//! CasJobs client: settings, credentials and the call primitive

use std::path::Path;
use log::{debug, info};
use url::Url;
use crate::config::{Password, Settings};
use crate::error::{CasJobsError, Result};
use super::transport::{HttpTransport, Transport};
use super::{DataTarget, CONFIG_FILE};

/// Parameters whose values never reach a log line
const SECRET_PARAMS: [&str; 2] = ["pw", "owner_pw"];

/// Client for the CasJobs job service
///
/// Every method performs one blocking GET against
/// `<endpoint>/<Operation>?<params>`. The client is not meant to be shared
/// between threads while its settings change; use one instance per thread.
#[derive(Debug, Clone)]
pub struct CasJobs<T = HttpTransport> {
    settings: Settings,
    transport: T,
}

impl CasJobs<HttpTransport> {
    /// Creates a client with default settings and the HTTP transport
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use casjobs_client::CasJobs;
    ///
    /// let mut client = CasJobs::new();
    /// client.set_login(1234, "secret");
    /// ```
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for CasJobs<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> CasJobs<T> {
    /// Creates a client with default settings over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            settings: Settings::default(),
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Stores the web service id and password used by every call
    pub fn set_login(&mut self, wsid: i64, password: impl Into<String>) {
        self.settings.wsid = Some(wsid);
        self.settings.password = Some(Password::new(password));
    }

    /// Sets the default data release, rejecting unknown labels
    pub fn set_target(&mut self, target: &str) -> Result<()> {
        self.settings.target = target.parse::<DataTarget>()?;
        Ok(())
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.settings.endpoint = endpoint.into();
    }

    /// Loads `key=value` settings from `path`
    ///
    /// Fails with [`CasJobsError::ConfigNotFound`] if the file is missing.
    pub fn load_config(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.settings.load_file(path)
    }

    /// Loads [`CONFIG_FILE`] from the current directory
    pub fn load_default_config(&mut self) -> Result<()> {
        self.load_config(CONFIG_FILE)
    }

    /// Stored credentials, or an error if either is missing
    pub(super) fn credentials(&self) -> Result<(i64, &Password)> {
        match (self.settings.wsid, self.settings.password.as_ref()) {
            (Some(wsid), Some(password)) => Ok((wsid, password)),
            _ => Err(CasJobsError::MissingCredentials),
        }
    }

    /// Runs an authenticated operation, sending credentials as `wsid`/`pw`
    pub(super) fn call_auth(&self, operation: &str, params: &[(&str, String)]) -> Result<String> {
        self.call_with_login("wsid", "pw", operation, params)
    }

    /// Runs an authenticated operation under custom credential parameter names
    pub(super) fn call_with_login(
        &self,
        wsid_key: &str,
        pw_key: &str,
        operation: &str,
        params: &[(&str, String)],
    ) -> Result<String> {
        let (wsid, password) = self.credentials()?;
        let mut full = Vec::with_capacity(params.len() + 2);
        full.push((wsid_key, wsid.to_string()));
        full.push((pw_key, password.expose().to_string()));
        full.extend(params.iter().map(|(k, v)| (*k, v.clone())));

        self.call(operation, &full)
    }

    /// Sends `operation` with the given parameters and returns the body text
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use casjobs_client::CasJobs;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CasJobs::new();
    /// let body = client.call("GetJobStatus", &[("wsid", "1".to_string()), ("pw", "x".to_string()), ("jobId", "42".to_string())])?;
    /// println!("{}", body);
    /// # Ok(())
    /// # }
    /// ```
    pub fn call(&self, operation: &str, params: &[(&str, String)]) -> Result<String> {
        let url = self.operation_url(operation, params)?;

        if self.settings.verbose {
            info!("Calling CasJobs operation {}", operation);
        }
        if self.settings.debug {
            debug!("GET {}", redacted_query(&self.settings.endpoint, operation, params));
        }

        let body = self.transport.get(&url)?;
        if self.settings.debug {
            debug!("{} returned {} bytes", operation, body.len());
        }
        Ok(body)
    }

    fn operation_url(&self, operation: &str, params: &[(&str, String)]) -> Result<Url> {
        let base = format!("{}/{}", self.settings.endpoint.trim_end_matches('/'), operation);
        let url = Url::parse_with_params(&base, params.iter().map(|(k, v)| (*k, v.as_str())))?;
        Ok(url)
    }
}

/// Parses an integer body, either bare or wrapped in one XML element
pub(super) fn parse_int_response(operation: &str, body: &str) -> Result<i64> {
    let invalid = || CasJobsError::InvalidResponse {
        operation: operation.to_string(),
        body: body.to_string(),
    };

    let mut text = body.trim();
    if text.starts_with("<?xml") {
        let end = text.find("?>").ok_or_else(invalid)?;
        text = text[end + 2..].trim_start();
    }
    if text.starts_with('<') {
        let open_end = text.find('>').ok_or_else(invalid)?;
        let rest = &text[open_end + 1..];
        let close = rest.find("</").ok_or_else(invalid)?;
        text = rest[..close].trim();
    }

    text.parse().map_err(|_| invalid())
}

fn redacted_query(endpoint: &str, operation: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            if SECRET_PARAMS.contains(k) {
                format!("{}=***", k)
            } else {
                format!("{}={}", k, v)
            }
        })
        .collect();
    format!("{}/{}?{}", endpoint.trim_end_matches('/'), operation, query.join("&"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use crate::service::DEFAULT_SERVICE_ENDPOINT;

    /// Records every URL and answers with a fixed body
    pub(crate) struct StubTransport {
        pub body: String,
        pub requests: RefCell<Vec<Url>>,
    }

    impl StubTransport {
        pub fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }

        /// Operation name and decoded query of the only request made
        pub fn single_request(&self) -> (String, HashMap<String, String>) {
            let requests = self.requests.borrow();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            let url = &requests[0];
            let operation = url.path_segments().unwrap().last().unwrap().to_string();
            let query = url.query_pairs().into_owned().collect();
            (operation, query)
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &Url) -> Result<String> {
            self.requests.borrow_mut().push(url.clone());
            Ok(self.body.clone())
        }
    }

    pub(crate) fn logged_in(body: &str) -> CasJobs<StubTransport> {
        let mut client = CasJobs::with_transport(StubTransport::new(body));
        client.set_login(1234, "hunter2");
        client
    }

    #[test]
    fn test_client_creation() {
        let client = CasJobs::new();
        assert_eq!(client.settings().endpoint, DEFAULT_SERVICE_ENDPOINT);
        assert_eq!(client.settings().target, DataTarget::Dr13);
        assert!(client.settings().wsid.is_none());
    }

    #[test]
    fn test_set_login_stores_passed_password() {
        let mut client = CasJobs::with_transport(StubTransport::new(""));
        client.set_login(77, "p4ss");
        assert_eq!(client.settings().wsid, Some(77));
        assert_eq!(client.settings().password.as_ref().unwrap().expose(), "p4ss");
    }

    #[test]
    fn test_set_target() {
        let mut client = CasJobs::with_transport(StubTransport::new(""));
        client.set_target("DR11").unwrap();
        assert_eq!(client.settings().target, DataTarget::Dr11);
        assert!(client.set_target("DR14").is_err());
        assert_eq!(client.settings().target, DataTarget::Dr11);
    }

    #[test]
    fn test_call_builds_operation_url() {
        let mut client = CasJobs::with_transport(StubTransport::new("ok"));
        client.set_endpoint("http://example.org/casjobs/services/jobs.asmx/");
        let body = client
            .call("GetQueues", &[("wsid", "1".to_string()), ("qry", "SELECT a, b".to_string())])
            .unwrap();
        assert_eq!(body, "ok");

        let requests = client.transport().requests.borrow();
        assert_eq!(
            requests[0].as_str(),
            "http://example.org/casjobs/services/jobs.asmx/GetQueues?wsid=1&qry=SELECT+a%2C+b"
        );
    }

    #[test]
    fn test_missing_credentials_fail_fast() {
        let mut client = CasJobs::with_transport(StubTransport::new("1"));
        let err = client.call_auth("GetQueues", &[]).unwrap_err();
        assert!(matches!(err, CasJobsError::MissingCredentials));

        client.settings_mut().wsid = Some(5);
        assert!(matches!(
            client.call_auth("GetQueues", &[]),
            Err(CasJobsError::MissingCredentials)
        ));
        assert!(client.transport().requests.borrow().is_empty());
    }

    #[test]
    fn test_debug_output_hides_password() {
        let client = logged_in("");
        let rendered = format!("{:?}", client.settings());
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_call_with_debug_logging() {
        let mut client = logged_in("7");
        client.settings_mut().debug = true;
        client.settings_mut().verbose = true;
        assert_eq!(client.get_job_status(1).unwrap(), 7);

        client.settings_mut().debug = false;
        assert_eq!(client.get_job_status(1).unwrap(), 7);
        assert_eq!(client.transport().requests.borrow().len(), 2);
    }

    #[test]
    fn test_redacted_query() {
        let params = [("wsid", "1".to_string()), ("pw", "hunter2".to_string())];
        let line = redacted_query("http://h/jobs.asmx", "GetQueues", &params);
        assert_eq!(line, "http://h/jobs.asmx/GetQueues?wsid=1&pw=***");
    }

    #[test]
    fn test_parse_int_response() {
        assert_eq!(parse_int_response("GetJobStatus", "5").unwrap(), 5);
        assert_eq!(parse_int_response("SubmitJob", " 123\r\n").unwrap(), 123);
        assert_eq!(
            parse_int_response(
                "SubmitJob",
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n<long xmlns=\"http://Services.Cas.jhu.edu\">7001</long>"
            )
            .unwrap(),
            7001
        );
        assert_eq!(parse_int_response("GetJobStatus", "<int>-1</int>").unwrap(), -1);
    }

    #[test]
    fn test_parse_int_response_rejects_garbage() {
        let err = parse_int_response("GetJobStatus", "Server busy").unwrap_err();
        match err {
            CasJobsError::InvalidResponse { operation, body } => {
                assert_eq!(operation, "GetJobStatus");
                assert_eq!(body, "Server busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_int_response("GetJobStatus", "").is_err());
        assert!(parse_int_response("GetJobStatus", "<int>5").is_err());
    }
}
