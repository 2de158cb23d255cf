//! Aggregation engine.
//!
//! Independent read-only passes over a completed record collection:
//! - General summary
//! - Status/error analysis
//! - Temporal bucketing
//! - Report bundle (chart data)
//!
//! Top-N ranking is shared by all of them. No pass mutates its input, so
//! the passes can run in any order or concurrently.

pub mod errors;
pub mod profile;
pub mod ranking;
pub mod summary;
pub mod temporal;

pub use errors::*;
pub use profile::*;
pub use ranking::*;
pub use summary::*;
pub use temporal::*;
