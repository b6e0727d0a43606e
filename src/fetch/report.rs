//! Console rendering of fetch outcomes.

use std::io::{self, Write};

use super::error::{FetchError, FetchErrorKind};

/// Line written when the server cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error: no se pudo conectar con el servidor.";

/// Line written when the request exceeds its timeout.
pub const TIMEOUT_MESSAGE: &str = "Error: la petición tardó demasiado.";

/// Prefix of the line written for 4xx/5xx responses.
pub const HTTP_ERROR_PREFIX: &str = "Error HTTP:";

/// Successful response: status, decoded body and the encoding used to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Encoding label used to decode `body`.
    pub encoding: String,
    /// Complete decoded response body.
    pub body: String,
}

/// Writes a fetch outcome to `out`.
///
/// Success writes `Status:`, `Encoding:` and the body, each followed by a
/// newline. Handled failures write a single line. Errors of kind
/// [`FetchErrorKind::Other`] write nothing.
///
/// # Errors
///
/// Returns the underlying IO error if writing to `out` fails.
pub fn render<W: Write>(outcome: &Result<FetchReport, FetchError>, out: &mut W) -> io::Result<()> {
    match outcome {
        Ok(report) => {
            writeln!(out, "Status: {}", report.status)?;
            writeln!(out, "Encoding: {}", report.encoding)?;
            writeln!(out, "{}", report.body)?;
        }
        Err(error) => match error.kind() {
            FetchErrorKind::ConnectionFailure => writeln!(out, "{CONNECTION_ERROR_MESSAGE}")?,
            FetchErrorKind::Timeout => writeln!(out, "{TIMEOUT_MESSAGE}")?,
            FetchErrorKind::HttpStatusError => writeln!(out, "{HTTP_ERROR_PREFIX} {error}")?,
            FetchErrorKind::Other => {}
        },
    }
    out.flush()
}
