//! Outbound notifications.
//!
//! # Responsibilities
//! - Format down/recovery alerts (message.rs)
//! - Deliver them to a webhook (webhook.rs)
//!
//! # Design Decisions
//! - Fire-and-forget: delivery is not confirmed beyond the HTTP round trip
//! - One channel only; `Notifier` exists so tests can capture alerts

pub mod message;
pub mod webhook;

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

pub use message::AlertContext;
pub use webhook::{EnvWebhookNotifier, WebhookNotifier};

/// Delivers alert text somewhere a human will see it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> NotifyResult<()>;
}

/// Errors that can occur while sending a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The webhook environment variable is unset or empty.
    #[error("webhook URL not set: environment variable {0} is missing")]
    MissingWebhook(String),

    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Notifier that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> NotifyResult<()> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
        Ok(())
    }
}
