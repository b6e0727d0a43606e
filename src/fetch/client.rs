//! HTTP client wrapper for fetching a single page.
//!
//! This module provides the `FetchClient` struct which applies the request
//! descriptor to a `reqwest` client and turns the response into a
//! [`FetchReport`] or a classified [`FetchError`].

use reqwest::Client;
use reqwest::redirect::Policy;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::config::FetchConfig;
use super::constants::MAX_REDIRECTS;
use super::encoding::{decode_latin1, encoding_from_headers, is_latin1};
use super::error::FetchError;
use super::report::FetchReport;

/// HTTP client bound to one request descriptor.
///
/// # Example
///
/// ```no_run
/// use fetcher_core::{FetchClient, FetchConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FetchClient::new(&FetchConfig::default())?;
/// let report = client.fetch().await?;
/// println!("Status: {}", report.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    url: Url,
}

impl FetchClient {
    /// Creates a client for the configured URL, headers and timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The URL is malformed or its scheme is not http/https
    /// - A header name or value is invalid
    /// - The underlying HTTP client cannot be built
    #[instrument(level = "debug", skip(config), fields(url = %config.url))]
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.url).map_err(|_| FetchError::invalid_url(&config.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::invalid_url(&config.url));
        }

        let client = build_client(config)?;
        debug!(timeout_secs = config.timeout.as_secs_f64(), "HTTP client ready");
        Ok(Self { client, url })
    }

    /// Returns the URL this client requests.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issues the GET request and reads the full body.
    ///
    /// The body is decoded with the encoding reported by
    /// [`encoding_from_headers`]. ISO-8859-1 maps each byte to the same code
    /// point; other labels go through reqwest, and unknown ones decode as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if:
    /// - The server cannot be reached, the connect attempt times out, or the
    ///   connection closes before a response arrives (`Connection`)
    /// - A read exceeds the timeout (`Timeout`)
    /// - The server returns an error status, 4xx or 5xx (`HttpStatus`)
    /// - Anything else fails, e.g. too many redirects (`Request`)
    #[must_use = "fetch result contains the report to print"]
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<FetchReport, FetchError> {
        debug!("sending GET request");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_send(self.url.as_str(), e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let reason = status.canonical_reason().unwrap_or_default();
            warn!(
                status = status.as_u16(),
                final_url = %response.url(),
                "server returned error status"
            );
            return Err(FetchError::http_status(
                response.url().as_str(),
                status.as_u16(),
                reason,
            ));
        }

        let encoding = encoding_from_headers(response.headers());
        let final_url = response.url().clone();
        let body = if is_latin1(&encoding) {
            response.bytes().await.map(|bytes| decode_latin1(&bytes))
        } else {
            response.text_with_charset(&encoding).await
        }
        .map_err(|e| FetchError::from_body(final_url.as_str(), e))?;

        info!(
            status = status.as_u16(),
            encoding = %encoding,
            bytes = body.len(),
            "response received"
        );

        Ok(FetchReport {
            status: status.as_u16(),
            encoding,
            body,
        })
    }
}

fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    Client::builder()
        .default_headers(config.header_map()?)
        .connect_timeout(config.timeout)
        .read_timeout(config.timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .build()
        .map_err(FetchError::client)
}
