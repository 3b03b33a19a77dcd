// Display time conversion - UTC feed timestamps into the dashboard's zone
use chrono::{Datelike, Duration, Local, NaiveDateTime, TimeZone};

use crate::error::TelemetryError;

/// Standard-time offset of the display zone (Pacific) from UTC, in hours.
pub const BASE_OFFSET_HOURS: i64 = -8;

const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whole-hour offset applied to feed timestamps: the base offset, plus one
/// hour while daylight saving is in effect.
///
/// The offset is computed once per fetch from the host clock's *current*
/// state and applied uniformly to every entry in the batch, even when the
/// batch spans a DST transition. Known limitation, kept on purpose: polls
/// are minutes apart and the next fetch picks up the new offset.
pub fn display_offset_hours(dst_active: bool) -> i64 {
    BASE_OFFSET_HOURS + i64::from(dst_active)
}

/// Whether the host zone is currently observing daylight saving, judged by
/// comparing today's UTC offset against the zone's standard offset (the
/// smaller of the midwinter and midsummer offsets).
pub fn dst_currently_active() -> bool {
    let now = Local::now();
    let jan = local_offset_secs(now.year(), 1, 1);
    let jul = local_offset_secs(now.year(), 7, 1);
    now.offset().local_minus_utc() > jan.min(jul)
}

fn local_offset_secs(year: i32, month: u32, day: u32) -> i32 {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .earliest()
        .map(|dt| dt.offset().local_minus_utc())
        .unwrap_or_default()
}

/// Rewrite one `created_at` value from ISO-8601 UTC to the display zone,
/// `%Y-%m-%d %H:%M:%S`, 24-hour, no zone suffix.
pub fn to_display_time(utc_timestamp: &str, offset_hours: i64) -> Result<String, TelemetryError> {
    let parsed = NaiveDateTime::parse_from_str(utc_timestamp, FEED_TIMESTAMP_FORMAT).map_err(
        |source| TelemetryError::Timestamp {
            value: utc_timestamp.to_string(),
            source,
        },
    )?;
    let shifted = parsed + Duration::hours(offset_hours);
    Ok(shifted.format(DISPLAY_TIMESTAMP_FORMAT).to_string())
}
