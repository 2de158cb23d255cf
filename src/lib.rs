//! AccessLens Core - Access-log extraction and aggregation pipeline
//!
//! This crate turns NASA/Apache style access logs into traffic statistics
//! for operators. The implementation prioritizes:
//!
//! 1. **Tolerance** - Malformed lines, odd status codes and bad timestamps
//!    degrade results, never the run
//! 2. **Logging** - Every stage logged with run context
//! 3. **Determinism** - Pure aggregation passes over an immutable snapshot,
//!    identical whether run sequentially or on worker threads
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `model` - Parsed record shape
//! - `extraction` - Line grammar, timestamp parsing, progress tracking
//! - `aggregation` - Summary, error, temporal and report passes
//! - `pipeline` - Ingestion and orchestration
//! - `export` - CSV tables, summary text, JSON report
//! - `logging` - `log_event!` event lines, error log
//! - `config` - Run settings

pub mod aggregation;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use aggregation::{ErrorAnalysis, ErrorTable, RankedEntry, ReportBundle, Summary, TemporalSeries, TimeBucket};
pub use config::AnalysisConfig;
pub use error::{AnalyzerError, Result};
pub use model::{Record, StatusCode, TimestampedRecord};
pub use pipeline::{analyze_lines, analyze_source, AnalysisOutcome};

/// Initialize the process-wide logger.
///
/// `RUST_LOG` overrides the default `info` level. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
