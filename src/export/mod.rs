//! Export collaborators.
//!
//! Writes aggregation results as CSV tables, the operator summary text and
//! the JSON report bundle.

pub mod report;
pub mod tables;
pub mod text;

pub use report::*;
pub use tables::*;
pub use text::*;

use std::path::{Path, PathBuf};

use crate::aggregation::errors::ErrorAnalysis;
use crate::aggregation::temporal::TemporalSeries;
use crate::error::Result;

pub const DEVICE_ERRORS_FILE: &str = "device_errors.csv";
pub const FULL_ERROR_LOG_FILE: &str = "full_error_log.csv";
pub const HOURLY_FILE: &str = "temporal_analysis_hourly.csv";
pub const DAILY_FILE: &str = "temporal_analysis_daily.csv";
pub const REPORT_FILE: &str = "report.json";

/// Write the error tables. Nothing is written when there were no errors.
pub fn export_error_analysis(dir: &Path, analysis: &ErrorAnalysis) -> Result<Vec<PathBuf>> {
    let Some(table) = analysis.table() else {
        return Ok(Vec::new());
    };

    let device = dir.join(DEVICE_ERRORS_FILE);
    write_table_file(&device, &device_errors_table(table))?;

    let detailed = dir.join(FULL_ERROR_LOG_FILE);
    write_table_file(&detailed, &full_error_log_table(table))?;

    Ok(vec![device, detailed])
}

/// Write the hourly and daily tables, header-only when the series is empty.
pub fn export_temporal(dir: &Path, series: &TemporalSeries) -> Result<Vec<PathBuf>> {
    let hourly = dir.join(HOURLY_FILE);
    write_table_file(&hourly, &temporal_table(&series.hourly))?;

    let daily = dir.join(DAILY_FILE);
    write_table_file(&daily, &temporal_table(&series.daily))?;

    Ok(vec![hourly, daily])
}
