// Main entry point - wiring and the polling loop
mod application;
mod domain;
mod error;
mod infrastructure;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::application::monitor::ChannelMonitor;
use crate::domain::channel::Channel;
use crate::infrastructure::config::load_monitors_config;
use crate::infrastructure::feed_client::FeedClient;
use crate::infrastructure::transport::HttpTransport;

const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let monitors_config = load_monitors_config()?;
    anyhow::ensure!(
        !monitors_config.monitors.is_empty(),
        "no monitors configured in config/monitors.toml"
    );

    let client = FeedClient::new(Arc::new(HttpTransport::new()));

    let mut monitors: Vec<ChannelMonitor> = monitors_config
        .monitors
        .into_iter()
        .map(|entry| {
            ChannelMonitor::new(
                entry.name,
                Channel::new(entry.channel, entry.key),
                entry.fields,
                entry.results,
            )
        })
        .collect();

    tracing::info!(
        "polling {} channel(s) every {}s",
        monitors.len(),
        POLL_INTERVAL.as_secs()
    );

    loop {
        for monitor in &mut monitors {
            match monitor.refresh(&client) {
                Ok(()) => log_latest(monitor),
                Err(e) => {
                    tracing::error!("refresh failed for {}: {}", monitor.display_name(), e);
                }
            }
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn log_latest(monitor: &ChannelMonitor) {
    for &slot_number in monitor.monitored_slots() {
        match monitor.series(slot_number) {
            Some(series) => match (series.latest_value(), series.latest_timestamp()) {
                (Some(value), Some(timestamp)) => tracing::info!(
                    "{} {}: {:.1} at {}",
                    monitor.display_name(),
                    series.label(),
                    value,
                    timestamp
                ),
                _ => tracing::info!(
                    "{} {}: no points in the current window",
                    monitor.display_name(),
                    series.label()
                ),
            },
            None => tracing::info!(
                "{} field{}: no data yet",
                monitor.display_name(),
                slot_number
            ),
        }
    }
}
