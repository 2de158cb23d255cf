//! Error types for export and configuration.
//!
//! Data-quality conditions (malformed lines, unparseable status codes or
//! timestamps, unreadable sources) are recovered inside the pipeline and
//! never surface here.

use thiserror::Error;

/// Errors returned by fallible export and configuration operations.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Writing an export file or creating its directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV table failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendering the report bundle failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyzerError::InvalidConfig("top_n must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: top_n must be at least 1"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AnalyzerError = io.into();
        assert!(err.to_string().starts_with("I/O error"));

        let csv_err = csv::Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err: AnalyzerError = csv_err.into();
        assert!(matches!(err, AnalyzerError::Csv(_)));
        assert!(err.to_string().starts_with("CSV error"));
    }
}
