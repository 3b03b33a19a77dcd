// Feed client - request construction, response decoding, timestamp rewrite
use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::channel::Channel;
use crate::domain::feed::{ChannelSnapshot, FeedEntry};
use crate::error::TelemetryError;
use crate::infrastructure::display_time::{display_offset_hours, dst_currently_active, to_display_time};
use crate::infrastructure::transport::FeedTransport;

const SERVICE_BASE_URL: &str = "https://api.thingspeak.com";

#[derive(Debug, Deserialize)]
struct FeedDocument {
    #[serde(default)]
    channel: HashMap<String, Value>,
    #[serde(default)]
    feeds: Vec<RawFeedEntry>,
}

#[derive(Debug, Deserialize)]
struct RawFeedEntry {
    entry_id: i64,
    created_at: String,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

/// Retrieves one channel's most recent entries and produces a
/// [`ChannelSnapshot`] with timestamps already in the display zone.
pub struct FeedClient {
    transport: Arc<dyn FeedTransport>,
}

impl FeedClient {
    pub fn new(transport: Arc<dyn FeedTransport>) -> Self {
        Self { transport }
    }

    /// One synchronous GET, no retry. `max_entries` is trusted as-is; the
    /// caller clamps it to [`crate::domain::series::MAX_REQUEST_SIZE`].
    pub fn fetch_snapshot(
        &self,
        channel: &Channel,
        max_entries: usize,
    ) -> Result<ChannelSnapshot, TelemetryError> {
        let url = self.build_feed_url(channel, max_entries);
        tracing::debug!("GET {}", url);

        let response = self.transport.get(&url)?;
        if response.status != 200 {
            tracing::error!("GET {} returned status {}", url, response.status);
            return Err(TelemetryError::Status {
                url,
                status: response.status,
            });
        }

        let document: FeedDocument = serde_json::from_str(&response.body)?;
        tracing::debug!("decoded {} feed entries from {}", document.feeds.len(), url);

        let offset_hours = display_offset_hours(dst_currently_active());
        Self::build_snapshot(document, offset_hours)
    }

    fn build_feed_url(&self, channel: &Channel, max_entries: usize) -> String {
        format!(
            "{}/channels/{}/feeds.json?api_key={}&results={}",
            SERVICE_BASE_URL,
            urlencoding::encode(channel.id()),
            urlencoding::encode(channel.key()),
            max_entries
        )
    }

    /// Pure transform from the decoded wire document to the snapshot. The
    /// decoded document is consumed, not mutated: entries are rebuilt with
    /// display-zone timestamps and string-valued slots only.
    fn build_snapshot(
        document: FeedDocument,
        offset_hours: i64,
    ) -> Result<ChannelSnapshot, TelemetryError> {
        let labels = document
            .channel
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();

        let mut entries = Vec::with_capacity(document.feeds.len());
        for raw in document.feeds {
            let created_at = to_display_time(&raw.created_at, offset_hours)?;
            let values = raw
                .fields
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(s) => Some((key, s)),
                    _ => None,
                })
                .collect();
            entries.push(FeedEntry::new(raw.entry_id, created_at, values));
        }

        Ok(ChannelSnapshot::new(labels, entries))
    }
}
