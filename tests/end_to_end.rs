//! Full check runs over HTTP against mock status pages and a mock webhook.

use std::time::Duration;

use status_sentinel::config::StatusPageConfig;
use status_sentinel::monitor::{AlertSettings, CheckRunner, MonitorError, Transition};
use status_sentinel::notify::WebhookNotifier;
use status_sentinel::probe::{ProbeError, StatusFetcher, StatusSource};
use status_sentinel::state::{FileStateStore, MonitorState, StateStore};

mod common;

const OUTAGE_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Status</title><script>window.labels = ["maintenance"];</script></head>
  <body>
    <div class="component">Checkout <span class="status">Major Outage</span></div>
    <div class="component">Admin <span class="status">Operational</span></div>
  </body>
</html>"#;

const CLEAN_PAGE: &str = r#"<html><body><h1>All Systems Operational</h1></body></html>"#;

fn page_config(addr: std::net::SocketAddr) -> StatusPageConfig {
    StatusPageConfig {
        url: format!("http://{}/", addr),
        timeout_secs: 5,
        ..StatusPageConfig::default()
    }
}

#[tokio::test]
async fn test_fetcher_classifies_live_page() {
    let addr = common::start_status_page(200, OUTAGE_PAGE).await;
    let fetcher = StatusFetcher::new(&page_config(addr)).unwrap();

    let outcome = fetcher.check().await.unwrap();
    assert!(outcome.is_down);
    assert_eq!(outcome.matched_phrase.as_deref(), Some("major outage"));
}

#[tokio::test]
async fn test_fetcher_rejects_error_status() {
    let addr = common::start_status_page(503, "Service Unavailable").await;
    let fetcher = StatusFetcher::new(&page_config(addr)).unwrap();

    let err = fetcher.check().await.unwrap_err();
    assert!(matches!(err, ProbeError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_outage_then_recovery_through_webhook() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStateStore::new(dir.path().join("state.txt"));
    let (hook_addr, received) = common::start_webhook_sink().await;
    let notifier = WebhookNotifier::new(format!("http://{}/hook", hook_addr), Duration::from_secs(5));

    // Outage detected: one alert, state persisted.
    let down_addr = common::start_status_page(200, OUTAGE_PAGE).await;
    let fetcher = StatusFetcher::new(&page_config(down_addr)).unwrap();
    let alerts = AlertSettings {
        service: "Shopify".into(),
        status_url: fetcher.url().to_string(),
    };
    let transition = CheckRunner::new(&fetcher, &store, &notifier, alerts.clone())
        .run()
        .await
        .unwrap();
    assert!(matches!(transition, Transition::WentDown { .. }));
    assert_eq!(store.load().unwrap(), MonitorState::Down);

    // Same outage again: no second alert.
    let transition = CheckRunner::new(&fetcher, &store, &notifier, alerts.clone())
        .run()
        .await
        .unwrap();
    assert_eq!(transition, Transition::StillDown);

    // Page clean: recovery alert.
    let up_addr = common::start_status_page(200, CLEAN_PAGE).await;
    let fetcher = StatusFetcher::new(&page_config(up_addr)).unwrap();
    let transition = CheckRunner::new(&fetcher, &store, &notifier, alerts)
        .run()
        .await
        .unwrap();
    assert_eq!(transition, Transition::Recovered);
    assert_eq!(store.load().unwrap(), MonitorState::Operational);

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);

    let down: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    let text = down["text"].as_str().unwrap();
    assert!(text.starts_with("🔴 *Shopify is DOWN!*"));
    assert!(text.contains("*Status:* Major Outage"));

    let up: serde_json::Value = serde_json::from_str(&bodies[1]).unwrap();
    assert!(up["text"].as_str().unwrap().contains("has RECOVERED!"));
}

#[tokio::test]
async fn test_webhook_error_status_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStateStore::new(dir.path().join("state.txt"));
    let hook_addr = common::start_status_page(500, "boom").await;
    let notifier = WebhookNotifier::new(format!("http://{}/hook", hook_addr), Duration::from_secs(5));

    let page_addr = common::start_status_page(200, OUTAGE_PAGE).await;
    let fetcher = StatusFetcher::new(&page_config(page_addr)).unwrap();
    let alerts = AlertSettings {
        service: "Shopify".into(),
        status_url: fetcher.url().to_string(),
    };

    CheckRunner::new(&fetcher, &store, &notifier, alerts)
        .run()
        .await
        .unwrap();
    assert_eq!(store.load().unwrap(), MonitorState::Down);
}

#[tokio::test]
async fn test_unreachable_webhook_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStateStore::new(dir.path().join("state.txt"));

    // Bind then drop to get a port nothing listens on.
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_addr = closed.local_addr().unwrap();
    drop(closed);
    let notifier = WebhookNotifier::new(format!("http://{}/hook", closed_addr), Duration::from_secs(2));

    let page_addr = common::start_status_page(200, OUTAGE_PAGE).await;
    let fetcher = StatusFetcher::new(&page_config(page_addr)).unwrap();
    let alerts = AlertSettings {
        service: "Shopify".into(),
        status_url: fetcher.url().to_string(),
    };

    let err = CheckRunner::new(&fetcher, &store, &notifier, alerts)
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::Notify(_)));
    assert_eq!(store.load().unwrap(), MonitorState::Operational);
    assert!(!dir.path().join("state.txt").exists());
}
