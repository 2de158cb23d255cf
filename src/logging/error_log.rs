//! Append-only error log.
//!
//! One line per failure, prefixed with the local wall-clock time:
//! `[2026-01-29 14:03:11] Empty or unreadable file: access.log`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use crate::error::Result;

/// Timestamp prefix format for error log lines.
pub const ERROR_LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File-backed error log. Appends from several threads are serialized.
#[derive(Debug)]
pub struct ErrorLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one message, creating the file and its directory on first use.
    pub fn append(&self, message: &str) -> Result<()> {
        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let timestamp = Local::now().format(ERROR_LOG_TIME_FORMAT);
        writeln!(file, "[{}] {}", timestamp, message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("error_log.txt");
        let log = ErrorLog::new(&path);

        log.append("Empty or unreadable file: missing.log").unwrap();
        log.append("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] Empty or unreadable file: missing.log"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_line_prefix_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error_log.txt");
        ErrorLog::new(&path).append("boom").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // "[YYYY-MM-DD HH:MM:SS] boom"
        assert_eq!(content.as_bytes()[0], b'[');
        assert_eq!(&content[20..22], "] ");
        let stamp = &content[1..20];
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, ERROR_LOG_TIME_FORMAT).is_ok());
    }
}
