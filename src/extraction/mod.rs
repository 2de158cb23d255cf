//! Record extraction module.
//!
//! Turns raw access-log lines into records and resolves their timestamps.

pub mod line;
pub mod progress;
pub mod timestamp;

pub use line::*;
pub use progress::*;
pub use timestamp::*;
