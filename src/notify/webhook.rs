//! Incoming-webhook notifier (Slack-compatible `{"text": ...}` payload).

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::NotifierConfig;
use crate::notify::{Notifier, NotifyError, NotifyResult};

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts alerts to a webhook URL.
///
/// The response body and status are ignored; only transport errors surface.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    /// Build from the environment variable named in `config`.
    pub fn from_env(config: &NotifierConfig) -> NotifyResult<Self> {
        let url = std::env::var(&config.webhook_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| NotifyError::MissingWebhook(config.webhook_env.clone()))?;

        Ok(Self::new(url, Duration::from_secs(config.timeout_secs)))
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, text: &str) -> NotifyResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text })
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Webhook answered with non-success status");
        }

        tracing::info!("Webhook sent: {}", text);
        Ok(())
    }
}

/// Resolves the webhook URL from the environment only when an alert is sent,
/// so runs without a transition need no credential.
pub struct EnvWebhookNotifier {
    config: NotifierConfig,
}

impl EnvWebhookNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Notifier for EnvWebhookNotifier {
    async fn send(&self, text: &str) -> NotifyResult<()> {
        WebhookNotifier::from_env(&self.config)?.send(text).await
    }
}
