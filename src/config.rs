//! Analysis configuration.
//!
//! Defaults match the directory layout operators already expect:
//! CSV exports under `datasets/cleaned`, the summary text and error log
//! under `reports/`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// Default number of entries kept by top-N rankings.
pub const DEFAULT_TOP_N: usize = 15;

/// Default progress notification step, in percent.
pub const DEFAULT_PROGRESS_STEP: u32 = 5;

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub top_n: usize,
    pub progress_step_percent: u32,
    /// Directory receiving the CSV tables and `report.json`.
    pub output_dir: PathBuf,
    pub summary_path: PathBuf,
    pub error_log_path: PathBuf,
    /// Run the aggregation passes on scoped worker threads.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            progress_step_percent: DEFAULT_PROGRESS_STEP,
            output_dir: PathBuf::from("datasets/cleaned"),
            summary_path: PathBuf::from("reports/summary_output.txt"),
            error_log_path: PathBuf::from("reports/error_log.txt"),
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(AnalyzerError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.progress_step_percent) {
            return Err(AnalyzerError::InvalidConfig(format!(
                "progress_step_percent must be within 1..=100, got {}",
                self.progress_step_percent
            )));
        }
        Ok(())
    }
}
