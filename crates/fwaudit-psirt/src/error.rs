//! Internal error types for PSIRT lookups.
//!
//! These are mapped to [`fwaudit_core::AdvisoryError`] at the port boundary.

use fwaudit_core::VendorFamily;
use thiserror::Error;

/// Result type alias for PSIRT operations.
pub type PsirtResult<T> = Result<T, PsirtError>;

/// Errors raised while fetching or scraping a vendor page.
#[derive(Debug, Error)]
pub enum PsirtError {
    /// Request completed with a non-success HTTP status.
    #[error("PSIRT request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The family has no page for this kind of lookup.
    #[error("No advisory page for {family}")]
    NoSource { family: VendorFamily },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A family extraction pattern failed to compile.
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}
