//! Status Sentinel
//!
//! Checks a public status page once and posts a webhook alert when the
//! service goes down or recovers. Meant to be run from cron or any other
//! external scheduler.
//!
//! # Flow
//!
//! ```text
//!   ┌──────────┐   GET    ┌─────────────┐
//!   │  probe   │─────────▶│ status page │
//!   └────┬─────┘          └─────────────┘
//!        │ CheckOutcome
//!        ▼
//!   ┌──────────┐  load   ┌────────────┐
//!   │ monitor  │◀───────▶│ state file │
//!   └────┬─────┘  save   └────────────┘
//!        │ WentDown / Recovered
//!        ▼
//!   ┌──────────┐  POST   ┌─────────────┐
//!   │  notify  │────────▶│   webhook   │
//!   └──────────┘         └─────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use status_sentinel::config::{resolve_config, ConfigOverrides};
use status_sentinel::monitor::{AlertSettings, CheckRunner};
use status_sentinel::notify::EnvWebhookNotifier;
use status_sentinel::probe::StatusFetcher;
use status_sentinel::state::FileStateStore;

#[derive(Parser)]
#[command(name = "status-sentinel")]
#[command(about = "Check a status page once and alert on outage transitions", long_about = None)]
struct Cli {
    /// TOML configuration file (all settings have defaults).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the state file path.
    #[arg(long)]
    state_file: Option<String>,

    /// Override the status page URL.
    #[arg(long)]
    status_url: Option<String>,

    /// Check and decide without sending alerts or saving state.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "status_sentinel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;

    tracing::debug!(
        status_url = %config.status_page.url,
        state_file = %config.state.path,
        webhook_env = %config.notifier.webhook_env,
        "Configuration loaded"
    );

    let fetcher = StatusFetcher::new(&config.status_page)?;
    let store = FileStateStore::new(&config.state.path);
    let notifier = EnvWebhookNotifier::new(config.notifier.clone());
    let alerts = AlertSettings {
        service: config.notifier.service_name.clone(),
        status_url: config.status_page.url.clone(),
    };

    let runner = CheckRunner::new(&fetcher, &store, &notifier, alerts).dry_run(cli.dry_run);
    if let Err(e) = runner.run().await {
        tracing::error!(error = %e, "Check failed");
        return Err(e.into());
    }

    Ok(())
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            state_file: self.state_file.clone(),
            status_url: self.status_url.clone(),
        }
    }
}
