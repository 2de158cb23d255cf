//! Record model.
//!
//! The canonical parsed-log-entry shape shared by extraction and
//! aggregation.

pub mod record;

pub use record::*;
