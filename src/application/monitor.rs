// Channel monitor - one dashboard entry composing fetch + extract
use std::collections::BTreeMap;

use crate::application::normalizer::extract_field;
use crate::domain::channel::{Channel, FieldSlot};
use crate::domain::series::{FieldSeries, MAX_REQUEST_SIZE};
use crate::error::TelemetryError;
use crate::infrastructure::feed_client::FeedClient;

/// Owns one channel's per-field series and the display name shown next to
/// them. Series are replaced wholesale on a successful refresh and left
/// untouched (stale but displayable) on a failed one.
pub struct ChannelMonitor {
    display_name: String,
    channel: Channel,
    slot_numbers: Vec<u8>,
    request_size: usize,
    series: BTreeMap<u8, FieldSeries>,
    valid_data: bool,
}

impl ChannelMonitor {
    pub fn new(
        display_name: String,
        channel: Channel,
        slot_numbers: Vec<u8>,
        request_size: Option<usize>,
    ) -> Self {
        Self {
            display_name,
            channel,
            slot_numbers,
            request_size: request_size.unwrap_or(MAX_REQUEST_SIZE).min(MAX_REQUEST_SIZE),
            series: BTreeMap::new(),
            valid_data: false,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn monitored_slots(&self) -> &[u8] {
        &self.slot_numbers
    }

    /// False until the first successful refresh; the caller gates display
    /// on this.
    pub fn has_valid_data(&self) -> bool {
        self.valid_data
    }

    /// Read-only view of the last successfully extracted series for a slot,
    /// or `None` if that field has never been extracted.
    pub fn series(&self, slot_number: u8) -> Option<&FieldSeries> {
        self.series.get(&slot_number)
    }

    /// One fetch-and-normalize cycle for every monitored field.
    ///
    /// Slot validation happens before any network work. A fetch failure
    /// returns the error with all series left stale. After a successful
    /// fetch, each field is extracted independently: a single field's
    /// failure (no label on the channel) is logged and leaves that field
    /// stale without aborting the others, and the cycle still counts as a
    /// success even when zero points were extracted.
    pub fn refresh(&mut self, client: &FeedClient) -> Result<(), TelemetryError> {
        let slots = self
            .slot_numbers
            .iter()
            .map(|&n| FieldSlot::new(n))
            .collect::<Result<Vec<_>, _>>()?;

        let snapshot = client.fetch_snapshot(&self.channel, self.request_size)?;

        for slot in slots {
            match extract_field(&snapshot, slot) {
                Ok(extraction) => {
                    for skip in &extraction.skipped {
                        tracing::warn!(
                            "{}: entry {} has non-numeric {} value {:?}, skipped",
                            self.display_name,
                            skip.entry_id,
                            slot.key(),
                            skip.raw
                        );
                    }
                    self.series.insert(slot.number(), extraction.series);
                }
                Err(err) => {
                    tracing::warn!(
                        "{}: could not extract {}: {}",
                        self.display_name,
                        slot.key(),
                        err
                    );
                }
            }
        }

        self.valid_data = true;
        Ok(())
    }
}
