//! Parsed access-log records.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

/// HTTP status as extracted from a log line.
///
/// The grammar captures three digit characters, which may still fail to
/// coerce (non-ASCII digits). Such records stay in whole-corpus counts and
/// are filtered out of status-dependent aggregations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Parsed(u16),
    Unparseable(String),
}

impl StatusCode {
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<u16>() {
            Ok(code) => StatusCode::Parsed(code),
            Err(_) => StatusCode::Unparseable(raw.to_string()),
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            StatusCode::Parsed(code) => Some(*code),
            StatusCode::Unparseable(_) => None,
        }
    }

    /// 4xx and 5xx (and anything above).
    pub fn is_error(&self) -> bool {
        self.code().is_some_and(|code| code >= 400)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Parsed(code) => write!(f, "{}", code),
            StatusCode::Unparseable(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatusCode::Parsed(code) => serializer.serialize_u16(*code),
            StatusCode::Unparseable(raw) => serializer.serialize_str(raw),
        }
    }
}

/// One parsed access-log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub client_address: String,
    /// Timestamp text with brackets stripped, e.g. `01/Aug/1995:00:00:01 -0400`.
    pub raw_timestamp: String,
    pub request_line: String,
    pub method: Option<String>,
    pub path: Option<String>,
    pub status: StatusCode,
}

impl Record {
    /// Build a record from the four captured fields.
    pub fn new(
        client_address: &str,
        raw_timestamp: &str,
        request_line: &str,
        raw_status: &str,
    ) -> Self {
        let (method, path) = split_request_line(request_line);
        Self {
            client_address: client_address.to_string(),
            raw_timestamp: raw_timestamp.to_string(),
            request_line: request_line.to_string(),
            method,
            path,
            status: StatusCode::from_raw(raw_status),
        }
    }
}

/// Split `METHOD /path PROTO` into its first two whitespace-separated tokens.
pub fn split_request_line(request_line: &str) -> (Option<String>, Option<String>) {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().map(str::to_string);
    let path = parts.next().map(str::to_string);
    (method, path)
}

/// A record whose timestamp resolved to an absolute instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampedRecord<'a> {
    pub record: &'a Record,
    pub instant: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_coercion() {
        assert_eq!(StatusCode::from_raw("404"), StatusCode::Parsed(404));
        assert_eq!(StatusCode::from_raw("000"), StatusCode::Parsed(0));
        assert_eq!(StatusCode::from_raw("999").code(), Some(999));

        // Arabic-Indic digits satisfy a Unicode \d but not integer parsing
        let odd = StatusCode::from_raw("٤٠٤");
        assert_eq!(odd, StatusCode::Unparseable("٤٠٤".to_string()));
        assert_eq!(odd.code(), None);
        assert!(!odd.is_error());
    }

    #[test]
    fn test_is_error_threshold() {
        assert!(!StatusCode::Parsed(399).is_error());
        assert!(StatusCode::Parsed(400).is_error());
        assert!(StatusCode::Parsed(503).is_error());
    }

    #[test]
    fn test_split_request_line() {
        assert_eq!(
            split_request_line("GET /history/apollo/ HTTP/1.0"),
            (Some("GET".to_string()), Some("/history/apollo/".to_string()))
        );
        assert_eq!(split_request_line("GET"), (Some("GET".to_string()), None));
        assert_eq!(split_request_line("   "), (None, None));
        assert_eq!(
            split_request_line("GET  /double-space"),
            (Some("GET".to_string()), Some("/double-space".to_string()))
        );
    }

    #[test]
    fn test_record_new() {
        let record = Record::new(
            "199.72.81.55",
            "01/Jul/1995:00:00:01 -0400",
            "GET /history/apollo/ HTTP/1.0",
            "200",
        );
        assert_eq!(record.method.as_deref(), Some("GET"));
        assert_eq!(record.path.as_deref(), Some("/history/apollo/"));
        assert_eq!(record.status, StatusCode::Parsed(200));
    }

    #[test]
    fn test_record_serializes_status_as_number() {
        let record = Record::new("1.2.3.4", "x", "GET / HTTP/1.0", "302");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], serde_json::json!(302));
        assert_eq!(json["client_address"], serde_json::json!("1.2.3.4"));
    }
}
