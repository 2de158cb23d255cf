//! Per-run identity.
//!
//! A `RunContext` names one pass over one source and doubles as the prefix
//! of every event that run logs.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Context for one analysis run over a single source.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub source: String,
    pub started_at: DateTime<Utc>,
}

impl RunContext {
    pub fn new(source: &str) -> Self {
        let run_id = format!("run-{}", &Uuid::new_v4().simple().to_string()[..8]);

        Self {
            run_id,
            source: source.to_string(),
            started_at: Utc::now(),
        }
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[run={}] [source={}]", self.run_id, self.source)
    }
}
