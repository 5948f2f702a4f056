//! Persisted monitor state.
//!
//! # State Machine
//! ```text
//! Operational → Down:        outage phrase found, down alert sent
//! Down        → Operational: page clean again, recovery alert sent
//! ```
//!
//! # Design Decisions
//! - The persisted form is a single plain-text token per file
//! - A missing file means Operational
//! - Storage is behind the `StateStore` trait so tests can swap in memory

pub mod store;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use store::{FileStateStore, MemoryStateStore, StateStore};

/// Last known status of the watched service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonitorState {
    #[default]
    Operational,
    Down,
}

impl MonitorState {
    /// Token written to the state file.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorState::Operational => "operational",
            MonitorState::Down => "down",
        }
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is neither `operational` nor `down`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state token '{0}'")]
pub struct UnknownStateToken(pub String);

impl FromStr for MonitorState {
    type Err = UnknownStateToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "operational" => Ok(MonitorState::Operational),
            "down" => Ok(MonitorState::Down),
            other => Err(UnknownStateToken(other.to_string())),
        }
    }
}

/// Errors raised while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
