//! User-Agent string sent with fetch requests.
//!
//! The target site is requested the way a desktop browser would request it,
//! so the default header set carries a browser-like identity instead of a
//! tool identity.

/// Browser User-Agent sent by the default request configuration.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default User-Agent for fetch requests.
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    BROWSER_USER_AGENT.to_string()
}
