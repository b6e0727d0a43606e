//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Fetch a web page and print its status, encoding and body.
///
/// Requests https://jocarsa.com with a browser User-Agent and a 10 second
/// timeout. Connection failures, timeouts and HTTP error statuses are
/// reported as a single message.
#[derive(Parser, Debug)]
#[command(name = "fetcher")]
#[command(author, version, about)]
pub struct Args {
    /// Increase diagnostic verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostics except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set.
    ///
    /// Priority: quiet flag > verbose flag > default (warn).
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
