//! Constants for the fetch module (target, timeout, redirects).

/// Default target URL.
pub const DEFAULT_URL: &str = "https://jocarsa.com";

/// Default total request timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum redirects followed before the request fails.
pub const MAX_REDIRECTS: usize = 30;

/// Encoding reported for `text/*` responses that declare no charset.
pub(crate) const TEXT_DEFAULT_ENCODING: &str = "ISO-8859-1";

/// Encoding reported for JSON and untyped responses.
pub(crate) const FALLBACK_ENCODING: &str = "utf-8";
