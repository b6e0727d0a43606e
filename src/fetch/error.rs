//! Error types for the fetch module.
//!
//! Every failure carries the URL it happened on. [`FetchError::kind`] folds
//! the variants into the four reporting categories.

use thiserror::Error;

/// Reporting category of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The transport could not reach the server.
    ConnectionFailure,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The server answered with a 4xx or 5xx status.
    HttpStatusError,
    /// Any other fault. Not reported on stdout; propagated to the caller.
    Other,
}

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (refused, DNS, TLS handshake, connect timeout,
    /// connection closed before a response).
    #[error("connection error fetching {url}: {source}")]
    Connection {
        /// The URL that could not be reached.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before the response was fully read.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("{status} {} Error: {reason} for url: {url}", status_class(*.status))]
    HttpStatus {
        /// The final URL that returned the error status.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Canonical reason phrase, empty when the status has none.
        reason: String,
    },

    /// The configured URL is malformed or not http/https.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// A configured header name or value cannot be sent.
    #[error("invalid header: {name}")]
    InvalidHeader {
        /// Name of the offending header.
        name: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },

    /// Any other request fault (redirect loop, body decode failure, unclassified).
    #[error("request to {url} failed: {source}")]
    Request {
        /// The URL being fetched.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Writing the report failed.
    #[error("failed to write report: {source}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a connection error from a reqwest error.
    pub fn connection(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Connection {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>) -> Self {
        Self::InvalidHeader { name: name.into() }
    }

    /// Creates a client construction error.
    #[must_use]
    pub fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    /// Creates an IO error.
    #[must_use]
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { source }
    }

    /// Classifies a reqwest error raised before the response headers arrive.
    ///
    /// Connection failures win over timeouts, so a connect timeout is
    /// reported as a connection failure. A connection the server closes or
    /// resets before answering is also a connection failure.
    pub fn from_send(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_connect() {
            Self::connection(url, source)
        } else if source.is_timeout() {
            Self::timeout(url)
        } else if source.is_request() {
            Self::connection(url, source)
        } else {
            Self::Request { url, source }
        }
    }

    /// Classifies a reqwest error raised while reading the response body.
    ///
    /// Only timeouts are handled here; a body cut short is a [`FetchError::Request`].
    pub fn from_body(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            Self::timeout(url)
        } else {
            Self::Request { url, source }
        }
    }

    /// Returns the reporting category of this error.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Connection { .. } => FetchErrorKind::ConnectionFailure,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatusError,
            Self::InvalidUrl { .. }
            | Self::InvalidHeader { .. }
            | Self::Client { .. }
            | Self::Request { .. }
            | Self::Io { .. } => FetchErrorKind::Other,
        }
    }
}

fn status_class(status: u16) -> &'static str {
    if status >= 500 { "Server" } else { "Client" }
}
