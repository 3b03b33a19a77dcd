// Plot-ready per-field series with index-aligned columns
use crate::error::TelemetryError;

/// Largest number of entries requested from the feed service in one poll.
/// Also the capacity of every [`FieldSeries`].
pub const MAX_REQUEST_SIZE: usize = 100;

/// The normalized, plot-ready series for one field of one channel.
///
/// Four columns kept index-aligned at all times: local index (the x-axis,
/// dense and zero-based regardless of how many source entries were skipped),
/// numeric value (the y-axis), originating entry id, and display-zone
/// timestamp. The maximum length is enforced at append time: `push` rejects
/// points past `capacity`, and callers that walk larger inputs check
/// [`FieldSeries::is_full`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSeries {
    label: String,
    capacity: usize,
    indices: Vec<f32>,
    values: Vec<f32>,
    entry_ids: Vec<i64>,
    timestamps: Vec<String>,
}

impl FieldSeries {
    pub fn new(label: String, capacity: usize) -> Self {
        Self {
            label,
            capacity,
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            entry_ids: Vec::with_capacity(capacity),
            timestamps: Vec::with_capacity(capacity),
        }
    }

    /// Append one point. The local index is assigned here from the current
    /// length, which keeps the x-axis gapless by construction.
    pub fn push(&mut self, value: f32, entry_id: i64, timestamp: String) -> Result<(), TelemetryError> {
        if self.is_full() {
            return Err(TelemetryError::SeriesFull {
                label: self.label.clone(),
                capacity: self.capacity,
            });
        }
        self.indices.push(self.len() as f32);
        self.values.push(value);
        self.entry_ids.push(entry_id);
        self.timestamps.push(timestamp);
        Ok(())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn indices(&self) -> &[f32] {
        &self.indices
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn entry_ids(&self) -> &[i64] {
        &self.entry_ids
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    /// The freshest extracted value, for summary readouts.
    pub fn latest_value(&self) -> Option<f32> {
        self.values.last().copied()
    }

    pub fn latest_timestamp(&self) -> Option<&str> {
        self.timestamps.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> FieldSeries {
        let mut series = FieldSeries::new("Temperature".to_string(), MAX_REQUEST_SIZE);
        for i in 0..count {
            series
                .push(20.0 + i as f32, 100 + i as i64, format!("2024-12-23 23:{:02}:00", i))
                .unwrap();
        }
        series
    }

    #[test]
    fn test_columns_stay_aligned() {
        let series = filled(5);
        assert_eq!(series.len(), 5);
        assert_eq!(series.indices().len(), series.values().len());
        assert_eq!(series.values().len(), series.entry_ids().len());
        assert_eq!(series.entry_ids().len(), series.timestamps().len());
    }

    #[test]
    fn test_indices_are_dense_and_zero_based() {
        let series = filled(4);
        assert_eq!(series.indices(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut series = FieldSeries::new("Humidity".to_string(), 2);
        series.push(1.0, 1, "a".to_string()).unwrap();
        series.push(2.0, 2, "b".to_string()).unwrap();
        assert!(series.is_full());

        let err = series.push(3.0, 3, "c".to_string()).unwrap_err();
        assert!(matches!(err, TelemetryError::SeriesFull { capacity: 2, .. }));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_latest_accessors() {
        let series = filled(3);
        assert_eq!(series.latest_value(), Some(22.0));
        assert_eq!(series.latest_timestamp(), Some("2024-12-23 23:02:00"));

        let empty = FieldSeries::new("Temperature".to_string(), MAX_REQUEST_SIZE);
        assert_eq!(empty.latest_value(), None);
        assert_eq!(empty.latest_timestamp(), None);
    }
}
