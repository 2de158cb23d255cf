//! Timestamp normalization.
//!
//! Access logs carry `01/Aug/1995:00:00:01 -0400`. The offset is kept on the
//! parsed instant so temporal buckets follow the server's wall clock.

use chrono::{DateTime, FixedOffset};

use crate::log_event;
use crate::logging::structured::pass_tag;
use crate::model::{Record, TimestampedRecord};

/// `day/MonthAbbrev/year:hour:minute:second ±offset`
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Parse a raw access-log timestamp. `None` means unparseable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

/// Project the records whose timestamps parse, preserving order.
pub fn timestamp_records(records: &[Record]) -> Vec<TimestampedRecord<'_>> {
    let resolved: Vec<TimestampedRecord<'_>> = records
        .iter()
        .filter_map(|record| {
            parse_timestamp(&record.raw_timestamp)
                .map(|instant| TimestampedRecord { record, instant })
        })
        .collect();

    log_event!(
        debug,
        pass_tag("timestamps"),
        "TIMESTAMPS_RESOLVED",
        records = records.len(),
        resolved = resolved.len(),
        dropped = records.len() - resolved.len()
    );

    resolved
}
