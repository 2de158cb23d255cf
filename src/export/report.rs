//! JSON report bundle for report assembly and chart rendering.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::aggregation::profile::ReportBundle;
use crate::error::Result;

pub fn write_report(path: &Path, report: &ReportBundle) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
