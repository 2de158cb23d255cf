//! Analysis orchestration.
//!
//! Runs the aggregation passes over an ingested record collection and hands
//! the results to the export collaborators:
//! 1. Ingest the source (read + extract)
//! 2. Resolve timestamps once for the temporal and report passes
//! 3. Summary, error, temporal and report passes
//! 4. CSV tables, summary text, report bundle

use std::path::{Path, PathBuf};
use std::thread;

use crate::aggregation::errors::{analyze_errors, ErrorAnalysis};
use crate::aggregation::profile::{build_report, ReportBundle};
use crate::aggregation::summary::{summarize, Summary};
use crate::aggregation::temporal::{temporal_analysis, TemporalSeries};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::export::{export_error_analysis, export_temporal, save_summary, write_report, REPORT_FILE};
use crate::extraction::timestamp::timestamp_records;
use crate::log_event;
use crate::logging::error_log::ErrorLog;
use crate::model::Record;

use super::context::RunContext;
use super::ingestion::ingest_source;

/// Results of every aggregation pass over one record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub summary: Summary,
    pub errors: ErrorAnalysis,
    pub temporal: TemporalSeries,
    pub report: ReportBundle,
}

/// Run all passes sequentially.
pub fn run_passes(records: &[Record], top_n: usize) -> Aggregates {
    let stamped = timestamp_records(records);
    let summary = summarize(records, top_n);

    Aggregates {
        errors: analyze_errors(records),
        temporal: temporal_analysis(&stamped),
        report: build_report(&stamped, summary.clone()),
        summary,
    }
}

/// Run all passes on scoped worker threads.
///
/// Produces exactly what [`run_passes`] produces.
pub fn run_passes_parallel(records: &[Record], top_n: usize) -> Aggregates {
    let stamped = timestamp_records(records);

    thread::scope(|scope| {
        let errors = scope.spawn(|| analyze_errors(records));
        let temporal = scope.spawn(|| temporal_analysis(&stamped));

        let summary = summarize(records, top_n);
        let report = build_report(&stamped, summary.clone());

        Aggregates {
            summary,
            errors: join_pass(errors),
            temporal: join_pass(temporal),
            report,
        }
    })
}

/// Join a pass thread, re-raising its panic on the caller.
fn join_pass<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Extract and aggregate in-memory lines, without any file output.
pub fn analyze_lines<S: AsRef<str>>(lines: &[S], config: &AnalysisConfig) -> Aggregates {
    let records = crate::extraction::line::extract_all(lines);
    if config.parallel {
        run_passes_parallel(&records, config.top_n)
    } else {
        run_passes(&records, config.top_n)
    }
}

/// Everything one run produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub run_id: String,
    pub lines_read: usize,
    pub records: Vec<Record>,
    pub aggregates: Aggregates,
    pub written: Vec<PathBuf>,
}

/// Run the full pipeline over one log file.
///
/// Data problems (missing file, malformed lines, bad timestamps) are
/// absorbed; only export I/O failures are returned.
pub fn analyze_source(path: &Path, config: &AnalysisConfig) -> Result<AnalysisOutcome> {
    config.validate()?;

    let ctx = RunContext::new(&path.display().to_string());
    let error_log = ErrorLog::new(&config.error_log_path);

    log_event!(info, ctx, "RUN_START", top_n = config.top_n, parallel = config.parallel);

    let ingested = ingest_source(&ctx, path, config.progress_step_percent, &error_log);

    let aggregates = if config.parallel {
        run_passes_parallel(&ingested.records, config.top_n)
    } else {
        run_passes(&ingested.records, config.top_n)
    };

    let mut written = Vec::new();
    written.extend(export_error_analysis(&config.output_dir, &aggregates.errors)?);
    written.extend(export_temporal(&config.output_dir, &aggregates.temporal)?);

    save_summary(&config.summary_path, &aggregates.summary, config.top_n)?;
    written.push(config.summary_path.clone());

    let report_path = config.output_dir.join(REPORT_FILE);
    write_report(&report_path, &aggregates.report)?;
    written.push(report_path);

    for file in &written {
        log_event!(info, ctx, "EXPORTED", path = file.display());
    }

    log_event!(
        info,
        ctx,
        "RUN_COMPLETE",
        records = ingested.records.len(),
        files = written.len(),
        elapsed_ms = (chrono::Utc::now() - ctx.started_at).num_milliseconds()
    );

    Ok(AnalysisOutcome {
        run_id: ctx.run_id,
        lines_read: ingested.lines_read,
        records: ingested.records,
        aggregates,
        written,
    })
}
