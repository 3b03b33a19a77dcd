// Decoded feed data - one poll's worth of channel entries
use std::collections::HashMap;

use crate::domain::channel::FieldSlot;

/// The decoded response of one poll: channel-level field labels plus the
/// ordered entries, with timestamps already rewritten into the display zone.
/// Built fresh by the feed client on every successful fetch and discarded
/// after normalization.
#[derive(Debug, Clone)]
pub struct ChannelSnapshot {
    labels: HashMap<String, String>,
    entries: Vec<FeedEntry>,
}

impl ChannelSnapshot {
    pub fn new(labels: HashMap<String, String>, entries: Vec<FeedEntry>) -> Self {
        Self { labels, entries }
    }

    /// The human-readable label the channel assigns to a field slot.
    pub fn field_label(&self, slot: FieldSlot) -> Option<&str> {
        self.labels.get(slot.key()).map(String::as_str)
    }

    /// Entries in the order the service returned them; never re-sorted.
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }
}

/// One observation from the remote service. Slots the sensor did not report
/// for this entry are simply absent from `values`.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    entry_id: i64,
    created_at: String,
    values: HashMap<String, String>,
}

impl FeedEntry {
    pub fn new(entry_id: i64, created_at: String, values: HashMap<String, String>) -> Self {
        Self {
            entry_id,
            created_at,
            values,
        }
    }

    pub fn entry_id(&self) -> i64 {
        self.entry_id
    }

    /// Display-zone timestamp, `%Y-%m-%d %H:%M:%S`.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn field_value(&self, slot: FieldSlot) -> Option<&str> {
        self.values.get(slot.key()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_value_lookup() {
        let slot1 = FieldSlot::new(1).unwrap();
        let slot2 = FieldSlot::new(2).unwrap();

        let labels = HashMap::from([
            ("field1".to_string(), "Temperature".to_string()),
            ("name".to_string(), "Garage".to_string()),
        ]);
        let entry = FeedEntry::new(
            7,
            "2024-12-23 23:10:39".to_string(),
            HashMap::from([("field1".to_string(), "21.4".to_string())]),
        );
        let snapshot = ChannelSnapshot::new(labels, vec![entry]);

        assert_eq!(snapshot.field_label(slot1), Some("Temperature"));
        assert_eq!(snapshot.field_label(slot2), None);
        assert_eq!(snapshot.entries()[0].field_value(slot1), Some("21.4"));
        assert_eq!(snapshot.entries()[0].field_value(slot2), None);
    }
}
