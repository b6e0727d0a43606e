//! Fetcher Core Library
//!
//! This library provides the core functionality for the fetcher tool,
//! which requests a single web page and reports its status, text encoding
//! and body, or a human-readable failure category.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`fetch`] - Request configuration, HTTP client, error taxonomy and report rendering
//! - [`user_agent`] - The browser-like User-Agent sent with every request

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
pub mod user_agent;


// Re-export commonly used types
pub use fetch::{
    FetchClient, FetchConfig, FetchError, FetchErrorKind, FetchReport, encoding_from_headers,
    fetch_and_report, render,
};
