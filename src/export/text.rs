//! Plain-text summary for operators.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::aggregation::summary::Summary;
use crate::error::Result;

/// Operator-facing rendering of a [`Summary`]: fixed section headers and
/// `key : value` lines.
pub struct SummaryText<'a> {
    pub summary: &'a Summary,
    pub top_n: usize,
}

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "========== Network Log Summary ==========\n")?;
        writeln!(f, "Total Requests: {}", summary.total_requests)?;
        writeln!(f, "Unique IPs: {}\n", summary.unique_ips)?;

        writeln!(f, "---- Status Code Counts ----")?;
        for (code, count) in &summary.status_counts {
            writeln!(f, "  {} : {}", code, count)?;
        }

        writeln!(f, "\n---- Top {} Requested URLs ----", self.top_n)?;
        for entry in &summary.top_urls {
            writeln!(f, "  {} : {}", entry.key, entry.count)?;
        }

        writeln!(f, "\n---- Top {} Active IPs ----", self.top_n)?;
        for entry in &summary.top_ips {
            writeln!(f, "  {} : {}", entry.key, entry.count)?;
        }

        Ok(())
    }
}

pub fn render_summary(summary: &Summary, top_n: usize) -> String {
    SummaryText { summary, top_n }.to_string()
}

/// Write the rendered summary to `path`, replacing any previous file.
pub fn save_summary(path: &Path, summary: &Summary, top_n: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_summary(summary, top_n))?;
    Ok(())
}
