// Error types for the telemetry core
use thiserror::Error;

/// Failures surfaced by the feed client and normalizer. A failed fetch or
/// extraction never touches previously built series; callers log these and
/// keep displaying stale data.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("GET {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode feed response as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed feed timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("field slot {0} is out of range (valid slots are 1..=8)")]
    InvalidFieldSlot(u8),

    #[error("series {label:?} is at capacity ({capacity} points)")]
    SeriesFull { label: String, capacity: usize },

    #[error("channel does not define a label for {0}")]
    MissingFieldLabel(String),
}
