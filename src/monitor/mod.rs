//! Check orchestration.
//!
//! # Data Flow
//! ```text
//! StatusSource::check()  → CheckOutcome
//! StateStore::load()     → last MonitorState
//!     → transition.rs decides WentDown / StillDown / Recovered / StillOperational
//!     → Notifier::send() for WentDown and Recovered
//!     → StateStore::save() after a successful send
//! ```
//!
//! # Design Decisions
//! - Alert before persisting: a failed send leaves the old state so the next run retries
//! - No retries within a run; the external scheduler provides the cadence

pub mod runner;
pub mod transition;

use thiserror::Error;

use crate::notify::NotifyError;
use crate::probe::ProbeError;
use crate::state::StateError;

pub use runner::{AlertSettings, CheckRunner};
pub use transition::Transition;

/// Any failure that aborts a check run.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Result type for a check run.
pub type MonitorResult<T> = Result<T, MonitorError>;
