//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SentinelConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line values that replace file settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub state_file: Option<String>,
    pub status_url: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SentinelConfig) {
        if let Some(path) = &self.state_file {
            config.state.path = path.clone();
        }
        if let Some(url) = &self.status_url {
            config.status_page.url = url.clone();
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SentinelConfig, ConfigError> {
    resolve_config(Some(path), &ConfigOverrides::default())
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SentinelConfig, ConfigError> {
    let config: SentinelConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the effective configuration: file (or defaults), then overrides,
/// then a single validation pass over the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<SentinelConfig, ConfigError> {
    let mut config: SentinelConfig = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => SentinelConfig::default(),
    };

    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
