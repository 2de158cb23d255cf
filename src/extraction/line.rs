//! Access-log line extraction.
//!
//! Matches `<ipv4> - - [<timestamp>] "<request>" <status>` anywhere in the
//! line. Lines that do not match are skipped without logging, since large
//! logs routinely carry heterogeneous content.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::progress::ProgressTracker;
use crate::model::Record;

lazy_static! {
    /// NASA/Apache access log pattern
    static ref ACCESS_LINE_PATTERN: Regex = Regex::new(
        r#"(\d+\.\d+\.\d+\.\d+)\s-\s-\s\[(.*?)\]\s"(.*?)"\s(\d{3})"#
    ).unwrap();
}

/// Extract a record from one line, if it matches the grammar.
///
/// # Examples
/// ```
/// use accesslens_core::extraction::extract_record;
///
/// let line = r#"10.0.0.1 - - [01/Aug/1995:00:00:01 -0400] "GET /a HTTP/1.0" 200 1839"#;
/// let record = extract_record(line).unwrap();
/// assert_eq!(record.client_address, "10.0.0.1");
/// assert_eq!(record.raw_timestamp, "01/Aug/1995:00:00:01 -0400");
/// assert!(extract_record("bad line").is_none());
/// ```
pub fn extract_record(line: &str) -> Option<Record> {
    let caps = ACCESS_LINE_PATTERN.captures(line)?;

    let client_address = caps.get(1)?.as_str();
    let timestamp = clean_timestamp(caps.get(2)?.as_str());
    let request_line = caps.get(3)?.as_str();
    let status = caps.get(4)?.as_str();

    Some(Record::new(client_address, &timestamp, request_line, status))
}

/// Strip any stray square brackets from a captured timestamp.
pub fn clean_timestamp(raw: &str) -> String {
    raw.replace(['[', ']'], "")
}

/// Extract records from `lines`, preserving input order.
///
/// `on_progress` receives the completion percentage each time `tracker`
/// crosses a threshold.
pub fn extract_records<S, F>(lines: &[S], tracker: &mut ProgressTracker, mut on_progress: F) -> Vec<Record>
where
    S: AsRef<str>,
    F: FnMut(f64),
{
    let total = lines.len();
    let mut records = Vec::with_capacity(total);

    for (idx, line) in lines.iter().enumerate() {
        if let Some(record) = extract_record(line.as_ref()) {
            records.push(record);
        }

        if let Some(percent) = tracker.observe(idx + 1, total) {
            on_progress(percent);
        }
    }

    records
}

/// Extract records without progress notifications.
pub fn extract_all<S: AsRef<str>>(lines: &[S]) -> Vec<Record> {
    lines
        .iter()
        .filter_map(|line| extract_record(line.as_ref()))
        .collect()
}
