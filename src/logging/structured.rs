//! Event-style log lines.
//!
//! Every pipeline event is one line: a context prefix (anything that
//! implements `Display`, usually a [`RunContext`](crate::pipeline::RunContext)),
//! an upper-case event name, then `key=value` pairs in call order.
//!
//! ```text
//! [run=run-1a2b3c4d] [source=access.log] EXTRACT_COMPLETE lines=3 records=2 skipped=1
//! ```

/// Log one event at the given `log` level.
///
/// The event name must be a string literal; values use their `Display`
/// rendering.
///
/// ```
/// use accesslens_core::log_event;
///
/// log_event!(info, "[pass=summary]", "SUMMARY_COMPLETE", records = 2, unique_ips = 1);
/// log_event!(debug, "[pass=temporal]", "TEMPORAL_EMPTY");
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $ctx:expr, $event:literal $(, $key:ident = $value:expr)* $(,)?) => {
        log::$level!(
            concat!("{} ", $event $(, " ", stringify!($key), "={}")*),
            $ctx $(, $value)*
        )
    };
}

/// Prefix for events raised by an aggregation pass, which has no run context.
pub fn pass_tag(pass: &str) -> String {
    format!("[pass={}]", pass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_tag() {
        assert_eq!(pass_tag("errors"), "[pass=errors]");
    }

    #[test]
    fn test_event_accepts_any_field_count() {
        let path = std::path::Path::new("reports/summary_output.txt");
        crate::log_event!(info, pass_tag("export"), "EXPORTED", path = path.display());
        crate::log_event!(warn, "[run=run-1]", "SOURCE_UNREADABLE", path = "missing.log", error = "not found",);
        crate::log_event!(error, "[run=run-1]", "ERROR_LOG_WRITE_FAILED");
        crate::log_event!(debug, "[run=run-1]", "PROGRESS", percent = format_args!("{:.1}", 12.5));
    }
}
