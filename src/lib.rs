//! Status page sentinel library.
//!
//! One-shot check of a public status page: classify it as operational or
//! down, compare with the last persisted state and post a webhook alert on
//! each transition.

pub mod config;
pub mod monitor;
pub mod notify;
pub mod probe;
pub mod state;

pub use config::SentinelConfig;
pub use monitor::{CheckRunner, Transition};
pub use state::MonitorState;
