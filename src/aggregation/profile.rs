//! Chart-oriented aggregations for the report collaborator.
//!
//! Everything here reads the timestamped projection, so records whose
//! timestamps fail to parse do not appear in the report bundle.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

use crate::aggregation::ranking::{top_n, top_n_entries, RankedEntry};
use crate::aggregation::summary::Summary;
use crate::model::{StatusCode, TimestampedRecord};

/// Number of `METHOD_STATUS` templates kept in the report.
pub const TEMPLATE_TOP_N: usize = 20;

/// Number of erroring clients kept in the report.
pub const ERROR_IP_TOP_N: usize = 15;

/// Earliest and latest instants in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// Data handed to report assembly and chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBundle {
    pub total_requests: usize,
    pub time_range: Option<TimeRange>,
    pub summary: Summary,
    /// Requests per hour of day, index 0 through 23.
    pub hourly_profile: Vec<usize>,
    /// Errors per hour of day. `None` when no timestamped record errored.
    pub error_profile: Option<Vec<usize>>,
    pub templates: Vec<RankedEntry>,
    pub top_error_ips: Vec<RankedEntry>,
}

/// Requests per local hour of day, all 24 hours present.
pub fn hour_of_day_profile<'r, 'a: 'r, I>(records: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'r TimestampedRecord<'a>>,
{
    let mut profile = vec![0; 24];
    for tr in records {
        profile[tr.instant.hour() as usize] += 1;
    }
    profile
}

/// `METHOD_STATUS` key for one record, `-` standing in for a missing method.
pub fn template_key(tr: &TimestampedRecord<'_>) -> String {
    let method = tr.record.method.as_deref().unwrap_or("-");
    match &tr.record.status {
        StatusCode::Parsed(code) => format!("{}_{}", method, code),
        StatusCode::Unparseable(raw) => format!("{}_{}", method, raw),
    }
}

pub fn time_range(records: &[TimestampedRecord<'_>]) -> Option<TimeRange> {
    let start = records.iter().map(|tr| tr.instant).min()?;
    let end = records.iter().map(|tr| tr.instant).max()?;
    Some(TimeRange { start, end })
}

/// Assemble the report bundle alongside an already computed summary.
pub fn build_report(records: &[TimestampedRecord<'_>], summary: Summary) -> ReportBundle {
    let errors: Vec<&TimestampedRecord<'_>> =
        records.iter().filter(|tr| tr.record.status.is_error()).collect();

    let error_profile = if errors.is_empty() {
        None
    } else {
        Some(hour_of_day_profile(errors.iter().copied()))
    };

    let templates = top_n(records.iter().map(template_key), TEMPLATE_TOP_N)
        .into_iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();

    let top_error_ips = top_n_entries(
        errors.iter().map(|tr| tr.record.client_address.as_str()),
        ERROR_IP_TOP_N,
    );

    ReportBundle {
        total_requests: records.len(),
        time_range: time_range(records),
        summary,
        hourly_profile: hour_of_day_profile(records),
        error_profile,
        templates,
        top_error_ips,
    }
}
