//! Pipeline orchestration module.
//!
//! Main analysis pipeline that coordinates:
//! - Source reading and record extraction
//! - Timestamp resolution
//! - Aggregation passes (sequential or threaded)
//! - Exports

pub mod analysis;
pub mod context;
pub mod ingestion;

pub use analysis::*;
pub use context::*;
pub use ingestion::*;
