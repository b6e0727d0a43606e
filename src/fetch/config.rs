//! Request descriptor for a single fetch.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use super::error::FetchError;
use crate::user_agent;

/// Target URL, header set and timeout for one GET request.
///
/// # Default Values
///
/// - `url`: `https://jocarsa.com`
/// - `headers`: `User-Agent` set to [`BROWSER_USER_AGENT`](crate::user_agent::BROWSER_USER_AGENT)
/// - `timeout`: 10 seconds, covering connect, response and body
///
/// Tests point the fetch at a mock server by overriding `url`:
///
/// ```
/// use std::time::Duration;
/// use fetcher_core::FetchConfig;
///
/// let config = FetchConfig::default()
///     .with_url("http://127.0.0.1:8080/")
///     .with_timeout(Duration::from_secs(1));
/// assert_eq!(config.url, "http://127.0.0.1:8080/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URL requested with GET.
    pub url: String,
    /// Header name/value pairs sent with the request, in order.
    pub headers: Vec<(String, String)>,
    /// Total time budget for the request.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            headers: vec![(
                USER_AGENT.as_str().to_string(),
                user_agent::default_fetch_user_agent(),
            )],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    /// Replaces the target URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replaces the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header, replacing any existing header with the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Converts the header pairs into a typed header map.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, FetchError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::invalid_header(name))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| FetchError::invalid_header(name))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}
