// Field extraction - snapshot entries into a plot-ready series
use crate::domain::channel::FieldSlot;
use crate::domain::feed::ChannelSnapshot;
use crate::domain::series::{FieldSeries, MAX_REQUEST_SIZE};
use crate::error::TelemetryError;

/// The outcome of one extraction: the rebuilt series plus the entries that
/// carried an unparseable value. Skips are ordinary data here, not errors;
/// the caller decides how loudly to report them.
#[derive(Debug)]
pub struct Extraction {
    pub series: FieldSeries,
    pub skipped: Vec<SkippedEntry>,
}

/// An entry whose slot value was present but not numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry_id: i64,
    pub raw: String,
}

/// Walk the snapshot in order and build the series for one field slot.
///
/// The channel must label the slot; a missing label fails the whole
/// extraction before any point is recorded. Per entry: an absent or null
/// slot value is skipped silently, a non-numeric value is skipped and
/// recorded in the diagnostics, and a numeric value becomes the next point.
/// Local indices stay dense regardless of skips.
pub fn extract_field(
    snapshot: &ChannelSnapshot,
    slot: FieldSlot,
) -> Result<Extraction, TelemetryError> {
    let label = snapshot
        .field_label(slot)
        .ok_or_else(|| TelemetryError::MissingFieldLabel(slot.key().to_string()))?;

    let mut series = FieldSeries::new(label.to_string(), MAX_REQUEST_SIZE);
    let mut skipped = Vec::new();

    for entry in snapshot.entries() {
        if series.is_full() {
            tracing::warn!(
                "series for {} reached {} points, ignoring remaining entries",
                slot.key(),
                series.capacity()
            );
            break;
        }

        let Some(raw) = entry.field_value(slot) else {
            continue;
        };

        match raw.trim().parse::<f32>() {
            Ok(value) => {
                series.push(value, entry.entry_id(), entry.created_at().to_string())?;
            }
            Err(_) => skipped.push(SkippedEntry {
                entry_id: entry.entry_id(),
                raw: raw.to_string(),
            }),
        }
    }

    Ok(Extraction { series, skipped })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::feed::FeedEntry;

    fn slot(number: u8) -> FieldSlot {
        FieldSlot::new(number).unwrap()
    }

    fn entry(entry_id: i64, value: Option<&str>) -> FeedEntry {
        let mut values = HashMap::new();
        if let Some(v) = value {
            values.insert("field1".to_string(), v.to_string());
        }
        FeedEntry::new(entry_id, format!("2024-12-23 23:{:02}:00", entry_id % 60), values)
    }

    fn snapshot(entries: Vec<FeedEntry>) -> ChannelSnapshot {
        let labels = HashMap::from([("field1".to_string(), "Temperature".to_string())]);
        ChannelSnapshot::new(labels, entries)
    }

    #[test]
    fn test_extracts_points_in_snapshot_order() {
        let snap = snapshot(vec![
            entry(1, Some("20.5")),
            entry(2, Some("21.0")),
            entry(3, Some("21.5")),
        ]);

        let extraction = extract_field(&snap, slot(1)).unwrap();
        let series = &extraction.series;

        assert_eq!(series.label(), "Temperature");
        assert_eq!(series.len(), 3);
        assert_eq!(series.indices(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.values(), &[20.5, 21.0, 21.5]);
        assert_eq!(series.entry_ids(), &[1, 2, 3]);
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_absent_values_skip_silently_and_keep_indices_dense() {
        let snap = snapshot(vec![
            entry(1, Some("20.5")),
            entry(2, None),
            entry(3, Some("21.5")),
        ]);

        let extraction = extract_field(&snap, slot(1)).unwrap();
        let series = &extraction.series;

        assert_eq!(series.len(), 2);
        assert_eq!(series.indices(), &[0.0, 1.0]);
        assert_eq!(series.entry_ids(), &[1, 3]);
        // an absent value is expected, not a diagnostic
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_non_numeric_values_are_recorded_and_extraction_continues() {
        let snap = snapshot(vec![
            entry(1, Some("20.5")),
            entry(2, Some("n/a")),
            entry(3, Some("21.5")),
        ]);

        let extraction = extract_field(&snap, slot(1)).unwrap();

        assert_eq!(extraction.series.len(), 2);
        assert_eq!(extraction.series.entry_ids(), &[1, 3]);
        assert_eq!(
            extraction.skipped,
            vec![SkippedEntry {
                entry_id: 2,
                raw: "n/a".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_label_fails_the_extraction() {
        let snap = snapshot(vec![entry(1, Some("20.5"))]);

        let err = extract_field(&snap, slot(2)).unwrap_err();
        assert!(matches!(err, TelemetryError::MissingFieldLabel(key) if key == "field2"));
    }

    #[test]
    fn test_columns_are_equal_length_after_mixed_input() {
        let snap = snapshot(vec![
            entry(1, Some("20.5")),
            entry(2, None),
            entry(3, Some("bad")),
            entry(4, Some("22.0")),
        ]);

        let series = extract_field(&snap, slot(1)).unwrap().series;

        assert_eq!(series.indices().len(), series.values().len());
        assert_eq!(series.values().len(), series.entry_ids().len());
        assert_eq!(series.entry_ids().len(), series.timestamps().len());
    }

    #[test]
    fn test_point_count_is_capped_at_request_size() {
        let entries = (0..MAX_REQUEST_SIZE as i64 + 5)
            .map(|i| entry(i, Some("20.0")))
            .collect();

        let series = extract_field(&snapshot(entries), slot(1)).unwrap().series;
        assert_eq!(series.len(), MAX_REQUEST_SIZE);
    }

    #[test]
    fn test_values_with_surrounding_whitespace_parse() {
        let snap = snapshot(vec![entry(1, Some(" 20.5\r\n"))]);

        let extraction = extract_field(&snap, slot(1)).unwrap();
        assert_eq!(extraction.series.values(), &[20.5]);
        assert!(extraction.skipped.is_empty());
    }
}
