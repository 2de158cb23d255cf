//! Temporal bucketing pass.
//!
//! Buckets are keyed on each record's local wall clock (the offset written
//! in the log), truncated to the hour or day. Each bucket start keeps the
//! offset of the first record that landed in it; zero buckets inherit the
//! offset of the bucket before them. Series run contiguously from the first
//! to the last bucket, with empty buckets present as zero.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::log_event;
use crate::logging::structured::pass_tag;
use crate::model::TimestampedRecord;

/// Bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketWidth {
    Hour,
    Day,
}

impl BucketWidth {
    pub fn duration(self) -> Duration {
        match self {
            BucketWidth::Hour => Duration::hours(1),
            BucketWidth::Day => Duration::days(1),
        }
    }

    /// Start of the bucket containing `local`.
    pub fn truncate(self, local: NaiveDateTime) -> NaiveDateTime {
        let time = match self {
            BucketWidth::Hour => {
                NaiveTime::from_hms_opt(local.hour(), 0, 0).unwrap_or(NaiveTime::MIN)
            }
            BucketWidth::Day => NaiveTime::MIN,
        };
        local.date().and_time(time)
    }
}

/// Request count for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBucket {
    pub start: DateTime<FixedOffset>,
    pub count: usize,
}

/// Attach `offset` to a wall-clock time without shifting it.
fn with_offset(local: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Hourly and daily request counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemporalSeries {
    pub hourly: Vec<TimeBucket>,
    pub daily: Vec<TimeBucket>,
}

impl TemporalSeries {
    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }
}

/// Contiguous, zero-filled series at one width.
pub fn bucket_series(records: &[TimestampedRecord<'_>], width: BucketWidth) -> Vec<TimeBucket> {
    let mut counts: BTreeMap<NaiveDateTime, (usize, FixedOffset)> = BTreeMap::new();
    for tr in records {
        counts
            .entry(width.truncate(tr.instant.naive_local()))
            .or_insert((0, *tr.instant.offset()))
            .0 += 1;
    }

    let (Some((&first, &(_, mut offset))), Some(&last)) =
        (counts.iter().next(), counts.keys().next_back())
    else {
        return Vec::new();
    };

    let step = width.duration();
    let mut series = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        let count = match counts.get(&cursor) {
            Some(&(count, seen)) => {
                offset = seen;
                count
            }
            None => 0,
        };
        series.push(TimeBucket {
            start: with_offset(cursor, offset),
            count,
        });
        cursor += step;
    }
    series
}

/// Run the temporal pass over timestamped records.
pub fn temporal_analysis(records: &[TimestampedRecord<'_>]) -> TemporalSeries {
    let series = TemporalSeries {
        hourly: bucket_series(records, BucketWidth::Hour),
        daily: bucket_series(records, BucketWidth::Day),
    };

    log_event!(
        debug,
        pass_tag("temporal"),
        "TEMPORAL_COMPLETE",
        records = records.len(),
        hourly_buckets = series.hourly.len(),
        daily_buckets = series.daily.len()
    );

    series
}
