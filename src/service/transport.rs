//! Blocking HTTP transport used by the client

use reqwest::blocking::Client as HttpClient;
use url::Url;
use crate::error::Result;

/// Performs a single GET and returns the decoded body
///
/// Implementations must surface network failures and non-2xx responses
/// as errors rather than empty bodies.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<String>;
}

/// Transport backed by a blocking `reqwest` client
///
/// Uses the HTTP client's default timeouts. Do not call from inside an
/// async runtime.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured client, e.g. one with a proxy or timeouts
    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        // reqwest errors carry the request url, and with it the password
        let response = self.http_client
            .get(url.clone())
            .send()
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;

        let body = response.bytes().map_err(reqwest::Error::without_url)?;
        Ok(String::from_utf8(body.to_vec())?)
    }
}
