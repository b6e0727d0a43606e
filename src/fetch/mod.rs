//! Single-page HTTP fetch with categorized failure reporting.
//!
//! This module issues one GET request described by a [`FetchConfig`],
//! collects the response into a [`FetchReport`], and renders either the
//! report or a failure message to a writer.
//!
//! # Failure categories
//!
//! - connection failure (refused, DNS, unreachable, TLS handshake)
//! - timeout (the request did not complete within the configured budget)
//! - HTTP error status (4xx, 5xx)
//! - anything else is [`FetchErrorKind::Other`] and is returned to the caller
//!
//! # Example
//!
//! ```no_run
//! use fetcher_core::fetch::{FetchConfig, fetch_and_report};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FetchConfig::default();
//! let mut out = std::io::stdout();
//! fetch_and_report(&config, &mut out).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod constants;
mod encoding;
mod error;
mod report;

use std::io::Write;

use tracing::{error, instrument};

pub use client::FetchClient;
pub use config::FetchConfig;
pub use constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL, MAX_REDIRECTS};
pub use encoding::encoding_from_headers;
pub use error::{FetchError, FetchErrorKind};
pub use report::{
    CONNECTION_ERROR_MESSAGE, FetchReport, HTTP_ERROR_PREFIX, TIMEOUT_MESSAGE, render,
};

/// Fetches the configured URL and writes the outcome to `out`.
///
/// Success and the three handled failure categories are written to `out`
/// and yield `Ok(())`. Faults of kind [`FetchErrorKind::Other`] write
/// nothing and are returned.
///
/// # Errors
///
/// Returns `FetchError` when the failure is outside the handled categories
/// (malformed URL, invalid header, redirect loop, body decode fault) or when
/// writing to `out` fails.
#[instrument(skip(config, out), fields(url = %config.url))]
pub async fn fetch_and_report<W: Write>(
    config: &FetchConfig,
    out: &mut W,
) -> Result<(), FetchError> {
    let outcome: Result<FetchReport, FetchError> =
        async { FetchClient::new(config)?.fetch().await }.await;

    render(&outcome, out).map_err(FetchError::io)?;

    match outcome {
        Err(e) if e.kind() == FetchErrorKind::Other => {
            error!(error = %e, "fetch failed outside handled categories");
            Err(e)
        }
        _ => Ok(()),
    }
}
