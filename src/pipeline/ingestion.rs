//! Source ingestion.
//!
//! Reads a log source and extracts records:
//! 1. Read raw bytes, dropping invalid UTF-8
//! 2. Report empty or unreadable sources to the error log
//! 3. Extract records with progress notifications

use std::fs;
use std::io;
use std::path::Path;

use crate::extraction::line::extract_records;
use crate::extraction::progress::ProgressTracker;
use crate::logging::error_log::ErrorLog;
use crate::model::Record;
use crate::log_event;

use super::context::RunContext;

/// Result of ingesting one source.
#[derive(Debug, Default)]
pub struct IngestResult {
    pub lines_read: usize,
    pub records: Vec<Record>,
}

impl IngestResult {
    /// Lines that did not match the access-log grammar.
    pub fn skipped_count(&self) -> usize {
        self.lines_read - self.records.len()
    }
}

/// Read all lines from `path`.
///
/// Invalid UTF-8 sequences are dropped; valid text, including any literal
/// U+FFFD, is kept as written.
pub fn read_source_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    Ok(text.lines().map(str::to_string).collect())
}

/// Read and extract one source.
///
/// A missing, unreadable or empty source yields an empty result and an
/// error-log entry; it never aborts the run.
pub fn ingest_source(
    ctx: &RunContext,
    path: &Path,
    progress_step_percent: u32,
    error_log: &ErrorLog,
) -> IngestResult {
    let lines = match read_source_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            log_event!(warn, ctx, "SOURCE_UNREADABLE", path = path.display(), error = e);
            Vec::new()
        }
    };

    if lines.is_empty() {
        let message = format!("Empty or unreadable file: {}", path.display());
        if let Err(e) = error_log.append(&message) {
            log_event!(error, ctx, "ERROR_LOG_WRITE_FAILED", path = error_log.path().display(), error = e);
        }
        return IngestResult::default();
    }

    log_event!(info, ctx, "EXTRACT_START", lines = lines.len());

    let mut tracker = ProgressTracker::new(progress_step_percent);
    let records = extract_records(&lines, &mut tracker, |percent| {
        log_event!(info, ctx, "PROGRESS", percent = format_args!("{:.1}", percent));
    });

    let result = IngestResult {
        lines_read: lines.len(),
        records,
    };

    log_event!(
        info,
        ctx,
        "EXTRACT_COMPLETE",
        lines = result.lines_read,
        records = result.records.len(),
        skipped = result.skipped_count()
    );

    result
}
