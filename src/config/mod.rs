//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → ConfigOverrides from the command line
//!     → validation.rs (once, on the merged result)
//!     → SentinelConfig (immutable for the rest of the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the sentinel runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::NotifierConfig;
pub use schema::SentinelConfig;
pub use schema::StateConfig;
pub use schema::StatusPageConfig;
