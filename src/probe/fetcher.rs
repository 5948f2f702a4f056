//! Status page fetching.
//!
//! # Responsibilities
//! - Issue one GET to the status page with a bounded timeout
//! - Fail on transport errors and non-success statuses (no retry)
//! - Hand the body to the page/classify pipeline

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use crate::config::StatusPageConfig;
use crate::probe::classify::PhraseMatcher;
use crate::probe::page::visible_text;
use crate::probe::{CheckOutcome, ProbeError, ProbeResult};

/// Something that can report whether the watched service is down.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn check(&self) -> ProbeResult<CheckOutcome>;
}

/// Fetches an HTML status page over HTTP and classifies its visible text.
pub struct StatusFetcher {
    client: reqwest::Client,
    url: String,
    user_agent: String,
    timeout: Duration,
    matcher: PhraseMatcher,
}

impl StatusFetcher {
    pub fn new(config: &StatusPageConfig) -> ProbeResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            matcher: PhraseMatcher::new(&config.bad_phrases),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> ProbeResult<String> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = %status, "Status page returned non-success status");
            return Err(ProbeError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.request_error(e))
    }

    fn request_error(&self, e: reqwest::Error) -> ProbeError {
        if e.is_timeout() {
            ProbeError::Timeout {
                url: self.url.clone(),
                secs: self.timeout.as_secs(),
            }
        } else {
            ProbeError::Request {
                url: self.url.clone(),
                source: e,
            }
        }
    }
}

#[async_trait]
impl StatusSource for StatusFetcher {
    async fn check(&self) -> ProbeResult<CheckOutcome> {
        tracing::debug!(url = %self.url, "Fetching status page");

        let body = self.fetch_body().await?;
        let text = visible_text(&body);
        let outcome = self.matcher.classify(&text);

        tracing::info!(
            url = %self.url,
            down = outcome.is_down,
            phrase = outcome.matched_phrase.as_deref().unwrap_or("-"),
            "Status page checked"
        );
        Ok(outcome)
    }
}
