//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the sentinel.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Status page probed when no URL is configured.
pub const DEFAULT_STATUS_URL: &str = "https://shopstatus.shopifyapps.com/";

/// Phrases that mark the service as not operational, in match priority order.
pub const DEFAULT_BAD_PHRASES: [&str; 4] = [
    "major outage",
    "partial outage",
    "degraded performance",
    "maintenance",
];

/// Root configuration for the sentinel.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SentinelConfig {
    /// Status page to probe and how to classify it.
    pub status_page: StatusPageConfig,

    /// Webhook notification settings.
    pub notifier: NotifierConfig,

    /// Persisted state location.
    pub state: StateConfig,
}

/// Status page probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusPageConfig {
    /// Page URL (e.g., "https://status.example.com/").
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with the probe.
    pub user_agent: String,

    /// Case-insensitive phrases that indicate an outage. First match wins.
    pub bad_phrases: Vec<String>,
}

impl Default for StatusPageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATUS_URL.to_string(),
            timeout_secs: 15,
            user_agent: "StatusSentinel/1.0".to_string(),
            bad_phrases: DEFAULT_BAD_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Webhook notifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Name of the environment variable holding the webhook URL.
    pub webhook_env: String,

    /// Webhook POST timeout in seconds.
    pub timeout_secs: u64,

    /// Display name used in alert text.
    pub service_name: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_env: "SLACK_WEBHOOK_URL".to_string(),
            timeout_secs: 10,
            service_name: "Shopify".to_string(),
        }
    }
}

/// State file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StateConfig {
    /// Path of the state token file, relative to the working directory unless absolute.
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: "state.txt".to_string(),
        }
    }
}
