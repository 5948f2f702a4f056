//! One check-and-notify pass.

use chrono::{DateTime, Utc};

use crate::monitor::transition::Transition;
use crate::monitor::MonitorResult;
use crate::notify::message::{down_alert, recovery_alert, AlertContext};
use crate::notify::Notifier;
use crate::probe::StatusSource;
use crate::state::StateStore;

/// Alert wording shared by every run.
#[derive(Debug, Clone)]
pub struct AlertSettings {
    pub service: String,
    pub status_url: String,
}

/// Runs a single check: probe, compare with stored state, alert, persist.
pub struct CheckRunner<'a> {
    source: &'a dyn StatusSource,
    store: &'a dyn StateStore,
    notifier: &'a dyn Notifier,
    alerts: AlertSettings,
    dry_run: bool,
}

impl<'a> CheckRunner<'a> {
    pub fn new(
        source: &'a dyn StatusSource,
        store: &'a dyn StateStore,
        notifier: &'a dyn Notifier,
        alerts: AlertSettings,
    ) -> Self {
        Self {
            source,
            store,
            notifier,
            alerts,
            dry_run: false,
        }
    }

    /// Decide and log, but neither notify nor persist.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> MonitorResult<Transition> {
        self.run_at(Utc::now()).await
    }

    /// Run with an explicit timestamp for the alert text.
    pub async fn run_at(&self, now: DateTime<Utc>) -> MonitorResult<Transition> {
        let outcome = self.source.check().await?;
        let last = self.store.load()?;
        let transition = Transition::decide(last, &outcome);

        tracing::info!(last = %last, down = outcome.is_down, transition = ?transition, "Check complete");

        let ctx = AlertContext {
            service: &self.alerts.service,
            status_url: &self.alerts.status_url,
            at: now,
        };
        let message = match &transition {
            Transition::WentDown { phrase } => Some(down_alert(&ctx, phrase)),
            Transition::Recovered => Some(recovery_alert(&ctx)),
            Transition::StillDown => {
                tracing::info!("{} still down. Already notified. Skipping.", self.alerts.service);
                None
            }
            Transition::StillOperational => {
                tracing::info!("{} is operational. No alert sent.", self.alerts.service);
                None
            }
        };

        if self.dry_run {
            if let Some(message) = message {
                tracing::info!(message = %message, "Dry run: alert not sent, state not saved");
            }
            return Ok(transition);
        }

        if let Some(message) = message {
            self.notifier.send(&message).await?;
        }
        if let Some(next) = transition.next_state() {
            self.store.save(next)?;
        }

        Ok(transition)
    }
}
