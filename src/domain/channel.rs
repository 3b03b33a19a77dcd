// Channel identity and field slots
use crate::error::TelemetryError;

/// Number of fixed field slots a channel may populate per entry.
pub const FIELD_SLOT_COUNT: u8 = 8;

/// One remote telemetry source: an opaque channel id plus its read API key.
/// Immutable after construction; the strings are never validated beyond
/// being treated as opaque.
#[derive(Debug, Clone)]
pub struct Channel {
    id: String,
    key: String,
}

impl Channel {
    pub fn new(id: String, key: String) -> Self {
        Self { id, key }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// One of the eight fixed data slots (`field1`..`field8`). Construction is
/// the validation point: a `FieldSlot` that exists is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldSlot(u8);

impl FieldSlot {
    pub fn new(number: u8) -> Result<Self, TelemetryError> {
        if (1..=FIELD_SLOT_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TelemetryError::InvalidFieldSlot(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// The JSON key this slot uses in channel metadata and feed entries.
    pub fn key(self) -> &'static str {
        match self.0 {
            1 => "field1",
            2 => "field2",
            3 => "field3",
            4 => "field4",
            5 => "field5",
            6 => "field6",
            7 => "field7",
            8 => "field8",
            _ => unreachable!("slot number validated at construction"),
        }
    }
}
