//! Vendor advisory port.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::VendorFamily;

/// Errors from advisory lookups.
///
/// These are domain-level errors; HTTP and URL errors from the adapter are
/// mapped to them at the boundary. The audit service never propagates them:
/// every failure turns into a documented fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdvisoryError {
    /// The advisory page answered with a non-success status.
    #[error("Advisory request failed with status {status}: {url}")]
    Http {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or connectivity error, including timeouts.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The family has no advisory source for this kind of lookup.
    #[error("No advisory source for {family}")]
    Unsupported {
        /// The family that was queried
        family: VendorFamily,
    },

    /// The family table holds an invalid URL or pattern.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong
        message: String,
    },

    /// Network access is disabled for this run.
    #[error("Advisory lookups are disabled (offline)")]
    Offline,
}

/// Result type alias for advisory lookups.
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;

/// Port trait for vendor PSIRT lookups.
///
/// The implementation lives in `fwaudit-psirt`. Implementations are
/// expected to cache per run so repeated lookups for one family cost a
/// single request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AdvisorySource: Send + Sync {
    /// Candidate versions scraped for a family, newest first, de-duplicated.
    async fn fetch_versions(&self, family: VendorFamily) -> AdvisoryResult<Vec<String>>;

    /// CVE identifiers listed for a family at the given version token.
    async fn fetch_cves(&self, family: VendorFamily, version: &str)
    -> AdvisoryResult<Vec<String>>;
}

/// Advisory source that never touches the network.
///
/// Every lookup fails with [`AdvisoryError::Offline`], so an audit run
/// falls back to the family table literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdvisorySource;

#[async_trait]
impl AdvisorySource for NoopAdvisorySource {
    async fn fetch_versions(&self, _family: VendorFamily) -> AdvisoryResult<Vec<String>> {
        Err(AdvisoryError::Offline)
    }

    async fn fetch_cves(
        &self,
        _family: VendorFamily,
        _version: &str,
    ) -> AdvisoryResult<Vec<String>> {
        Err(AdvisoryError::Offline)
    }
}
