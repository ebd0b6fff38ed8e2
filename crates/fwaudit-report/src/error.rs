//! Report errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors writing a report to disk.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create report directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
