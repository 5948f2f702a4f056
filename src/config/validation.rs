//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs and value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SentinelConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::SentinelConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid URL '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field}: unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{0}: must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("{0}: must not be empty")]
    Empty(&'static str),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &SentinelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_http_url("status_page.url", &config.status_page.url, &mut errors);

    if config.status_page.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("status_page.timeout_secs"));
    }
    if config.notifier.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("notifier.timeout_secs"));
    }

    if config.status_page.bad_phrases.is_empty()
        || config.status_page.bad_phrases.iter().any(|p| p.trim().is_empty())
    {
        errors.push(ValidationError::Empty("status_page.bad_phrases"));
    }
    if config.notifier.webhook_env.trim().is_empty() {
        errors.push(ValidationError::Empty("notifier.webhook_env"));
    }
    if config.state.path.trim().is_empty() {
        errors.push(ValidationError::Empty("state.path"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate that `value` parses as an absolute http(s) URL.
pub fn check_http_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme {
            field,
            scheme: url.scheme().to_string(),
        }),
        Err(_) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
