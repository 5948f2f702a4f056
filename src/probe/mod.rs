//! Status page probing.
//!
//! # Data Flow
//! ```text
//! fetcher.rs   GET status page (timeout, non-2xx is an error)
//!     → page.rs      visible text, lower-cased
//!     → classify.rs  first bad phrase in list order
//!     → CheckOutcome
//! ```

pub mod classify;
pub mod fetcher;
pub mod page;

use thiserror::Error;

pub use classify::PhraseMatcher;
pub use fetcher::{StatusFetcher, StatusSource};

/// Result of one status page check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_down: bool,
    /// The bad status phrase that was found, lower-case.
    pub matched_phrase: Option<String>,
}

impl CheckOutcome {
    pub fn operational() -> Self {
        Self {
            is_down: false,
            matched_phrase: None,
        }
    }

    pub fn down(phrase: impl Into<String>) -> Self {
        Self {
            is_down: true,
            matched_phrase: Some(phrase.into()),
        }
    }
}

/// Errors that can occur while probing the status page.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },

    /// Status page answered with a non-2xx code.
    #[error("status page {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;
