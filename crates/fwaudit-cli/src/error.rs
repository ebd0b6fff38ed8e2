//! CLI error type and exit codes.
//!
//! Handlers return `anyhow::Result`; the typed error at the root of the
//! chain decides the exit code.

use fwaudit_core::InventoryError;
use fwaudit_report::ReportError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or configuration error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The inventory could not be read or parsed.
    #[error("{0}")]
    Inventory(String),

    /// The report could not be written.
    #[error("{0}")]
    Report(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Map error to exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 65: Input data error (EX_DATAERR)
    /// - 74: I/O error (EX_IOERR)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Other(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Inventory(_) => 65, // EX_DATAERR
            Self::Report(_) => 74,    // EX_IOERR
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<Self>() {
            Ok(cli) => return cli,
            Err(err) => err,
        };
        let message = format!("{err:#}");
        if err.chain().any(|cause| cause.is::<InventoryError>()) {
            Self::Inventory(message)
        } else if err.chain().any(|cause| cause.is::<ReportError>()) {
            Self::Report(message)
        } else {
            Self::Other(message)
        }
    }
}
