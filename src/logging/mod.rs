//! Logging for analysis runs.
//!
//! `log_event!` writes one structured line per pipeline event; `ErrorLog`
//! is the append-only operator file for unreadable sources.

pub mod error_log;
pub mod structured;

pub use error_log::*;
pub use structured::*;
