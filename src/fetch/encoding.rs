//! Text encoding detection from response headers.

use reqwest::header::{CONTENT_TYPE, HeaderMap};

use super::constants::{FALLBACK_ENCODING, TEXT_DEFAULT_ENCODING};

/// Returns the text encoding used to decode a response body.
///
/// Resolution order:
/// 1. `charset` parameter of `Content-Type`, quotes stripped, as declared
/// 2. `ISO-8859-1` for `text/*` media types
/// 3. `utf-8` for everything else, including a missing `Content-Type`
#[must_use]
pub fn encoding_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or_else(
            || FALLBACK_ENCODING.to_string(),
            encoding_from_content_type,
        )
}

fn encoding_from_content_type(content_type: &str) -> String {
    let mut parts = content_type.split(';');
    let media_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();

    let charset = parts.find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
    });

    match charset {
        Some(charset) if !charset.is_empty() => charset,
        _ if media_type.starts_with("text/") => TEXT_DEFAULT_ENCODING.to_string(),
        _ => FALLBACK_ENCODING.to_string(),
    }
}

/// Returns true when `encoding` names ISO-8859-1 itself rather than windows-1252.
#[must_use]
pub(crate) fn is_latin1(encoding: &str) -> bool {
    let label = encoding.trim().to_ascii_lowercase().replace('_', "-");
    matches!(
        label.as_str(),
        "iso-8859-1" | "iso8859-1" | "iso-8859-1:1987" | "latin-1" | "latin1" | "l1" | "cp819"
    )
}

/// Decodes ISO-8859-1 bytes; every byte maps to the code point of the same value.
#[must_use]
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
