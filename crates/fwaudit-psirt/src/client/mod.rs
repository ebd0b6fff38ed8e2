//! PSIRT client.
//!
//! Generic over the HTTP backend so tests can run against canned pages.
//! Use [`DefaultPsirtClient`] in production.

mod advisories;
mod versions;

use fwaudit_core::VendorFamily;

use crate::cache::LookupCache;
use crate::config::PsirtClientConfig;
use crate::error::PsirtResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PSIRT client using the reqwest HTTP backend.
pub type DefaultPsirtClient = PsirtClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the vendor advisory pages.
///
/// The generic parameter `B` is an implementation detail - external code
/// should use `DefaultPsirtClient::new()` and the `AdvisorySource` trait.
pub struct PsirtClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) versions: LookupCache<VendorFamily>,
    pub(crate) cves: LookupCache<(VendorFamily, String)>,
}

impl DefaultPsirtClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be built (TLS backend
    /// initialisation).
    pub fn new(config: &PsirtClientConfig) -> PsirtResult<Self> {
        Ok(Self::with_backend(ReqwestBackend::new(config)?))
    }
}

impl<B: HttpBackend> PsirtClient<B> {
    /// Create a client over any backend, with an empty cache.
    pub(crate) fn with_backend(backend: B) -> Self {
        Self {
            backend,
            versions: LookupCache::default(),
            cves: LookupCache::default(),
        }
    }
}
