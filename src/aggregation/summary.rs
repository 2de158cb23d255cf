//! General summary pass.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::aggregation::ranking::{top_n_entries, RankedEntry};
use crate::log_event;
use crate::logging::structured::pass_tag;
use crate::model::Record;

/// Whole-corpus traffic snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_requests: usize,
    pub unique_ips: usize,
    /// Records with an unparseable status are not counted here.
    pub status_counts: BTreeMap<u16, usize>,
    pub top_urls: Vec<RankedEntry>,
    pub top_ips: Vec<RankedEntry>,
}

impl Summary {
    /// Number of records that contributed to `status_counts`.
    pub fn status_total(&self) -> usize {
        self.status_counts.values().sum()
    }
}

/// Summarize a record collection.
pub fn summarize(records: &[Record], top_n: usize) -> Summary {
    let unique_ips = records
        .iter()
        .map(|r| r.client_address.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut status_counts = BTreeMap::new();
    for code in records.iter().filter_map(|r| r.status.code()) {
        *status_counts.entry(code).or_insert(0) += 1;
    }

    let top_urls = top_n_entries(records.iter().filter_map(|r| r.path.as_deref()), top_n);
    let top_ips = top_n_entries(records.iter().map(|r| r.client_address.as_str()), top_n);

    log_event!(
        debug,
        pass_tag("summary"),
        "SUMMARY_COMPLETE",
        total = records.len(),
        unique_ips = unique_ips,
        statuses = status_counts.len()
    );

    Summary {
        total_requests: records.len(),
        unique_ips,
        status_counts,
        top_urls,
        top_ips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TOP_N;

    fn record(ip: &str, request: &str, status: &str) -> Record {
        Record::new(ip, "01/Aug/1995:00:00:01 -0400", request, status)
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[], DEFAULT_TOP_N);
        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.unique_ips, 0);
        assert!(summary.status_counts.is_empty());
        assert!(summary.top_urls.is_empty());
        assert!(summary.top_ips.is_empty());
    }

    #[test]
    fn test_counts_and_rankings() {
        let records = vec![
            record("10.0.0.1", "GET /a HTTP/1.0", "200"),
            record("10.0.0.2", "GET /b HTTP/1.0", "404"),
            record("10.0.0.1", "GET /a HTTP/1.0", "200"),
            record("10.0.0.3", "GET", "400"),
        ];

        let summary = summarize(&records, DEFAULT_TOP_N);
        assert_eq!(summary.total_requests, 4);
        assert_eq!(summary.unique_ips, 3);
        assert_eq!(summary.status_counts, BTreeMap::from([(200, 2), (400, 1), (404, 1)]));
        assert_eq!(
            summary.top_urls,
            vec![RankedEntry::new("/a", 2), RankedEntry::new("/b", 1)]
        );
        assert_eq!(summary.top_ips[0], RankedEntry::new("10.0.0.1", 2));
        assert_eq!(summary.top_ips.len(), 3);
    }

    #[test]
    fn test_unparseable_status_excluded_from_distribution_only() {
        let records = vec![
            record("10.0.0.1", "GET /a HTTP/1.0", "200"),
            record("10.0.0.2", "GET /a HTTP/1.0", "٢٠٠"),
        ];

        let summary = summarize(&records, DEFAULT_TOP_N);
        assert_eq!(summary.total_requests, 2);
        assert_eq!(summary.unique_ips, 2);
        assert_eq!(summary.status_total(), 1);
        assert_eq!(summary.top_urls, vec![RankedEntry::new("/a", 2)]);
    }

    #[test]
    fn test_top_n_limit() {
        let records: Vec<Record> = (0..20)
            .map(|i| record(&format!("10.0.0.{i}"), &format!("GET /{i} HTTP/1.0"), "200"))
            .collect();

        let summary = summarize(&records, 5);
        assert_eq!(summary.top_ips.len(), 5);
        assert_eq!(summary.top_urls.len(), 5);
        assert_eq!(summary.top_ips[0].key, "10.0.0.0");
    }
}
