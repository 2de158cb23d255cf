//! Flat tabular exports.
//!
//! Column names and order are fixed; downstream spreadsheets and chart
//! scripts read these files by header.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::aggregation::errors::ErrorTable;
use crate::aggregation::temporal::TimeBucket;
use crate::error::Result;

/// Bucket start rendering in temporal tables, offset included.
pub const BUCKET_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Header plus rows, all rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

fn write_rows<W: Write>(wtr: &mut Writer<W>, table: &Table) -> Result<()> {
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` as comma-separated text; fields are quoted only when needed.
pub fn write_table<W: Write>(writer: W, table: &Table) -> Result<()> {
    write_rows(&mut Writer::from_writer(writer), table)
}

/// Write `table` to `path`, creating parent directories.
pub fn write_table_file(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_rows(&mut Writer::from_path(path)?, table)
}

/// `IP_Address,Error_Count`, most errors first.
pub fn device_errors_table(table: &ErrorTable) -> Table {
    Table {
        headers: vec!["IP_Address", "Error_Count"],
        rows: table
            .by_client
            .iter()
            .map(|entry| vec![entry.key.clone(), entry.count.to_string()])
            .collect(),
    }
}

/// `ip,timestamp,request,status` for every error record.
pub fn full_error_log_table(table: &ErrorTable) -> Table {
    Table {
        headers: vec!["ip", "timestamp", "request", "status"],
        rows: table
            .records
            .iter()
            .map(|r| {
                vec![
                    r.client_address.clone(),
                    r.raw_timestamp.clone(),
                    r.request_line.clone(),
                    r.status.to_string(),
                ]
            })
            .collect(),
    }
}

/// `timestamp,request_count`, one row per bucket.
pub fn temporal_table(buckets: &[TimeBucket]) -> Table {
    Table {
        headers: vec!["timestamp", "request_count"],
        rows: buckets
            .iter()
            .map(|b| {
                vec![
                    b.start.format(BUCKET_TIME_FORMAT).to_string(),
                    b.count.to_string(),
                ]
            })
            .collect(),
    }
}
