//! Status/error analysis pass.
//!
//! Selects records with a status of 400 or above and counts them per
//! client address.

use serde::Serialize;

use crate::aggregation::ranking::{rank_all, RankedEntry};
use crate::log_event;
use crate::logging::structured::pass_tag;
use crate::model::Record;

/// Erroring clients and the records behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTable {
    /// Sorted by descending error count, ties in first-encountered order.
    pub by_client: Vec<RankedEntry>,
    pub records: Vec<Record>,
}

impl ErrorTable {
    pub fn total_errors(&self) -> usize {
        self.records.len()
    }
}

/// Outcome of the error pass. A clean corpus is reported explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ErrorAnalysis {
    NoErrors,
    Found(ErrorTable),
}

impl ErrorAnalysis {
    pub fn table(&self) -> Option<&ErrorTable> {
        match self {
            ErrorAnalysis::NoErrors => None,
            ErrorAnalysis::Found(table) => Some(table),
        }
    }

    pub fn has_errors(&self) -> bool {
        matches!(self, ErrorAnalysis::Found(_))
    }
}

/// Run the error pass.
pub fn analyze_errors(records: &[Record]) -> ErrorAnalysis {
    let errors: Vec<Record> = records
        .iter()
        .filter(|r| r.status.is_error())
        .cloned()
        .collect();

    if errors.is_empty() {
        log_event!(info, pass_tag("errors"), "ERRORS_NONE", records = records.len());
        return ErrorAnalysis::NoErrors;
    }

    let by_client: Vec<RankedEntry> = rank_all(errors.iter().map(|r| r.client_address.as_str()))
        .into_iter()
        .map(|(ip, count)| RankedEntry::new(ip, count))
        .collect();

    log_event!(
        info,
        pass_tag("errors"),
        "ERRORS_FOUND",
        errors = errors.len(),
        clients = by_client.len()
    );

    ErrorAnalysis::Found(ErrorTable {
        by_client,
        records: errors,
    })
}
