//! `AdvisorySource` implementation for `PsirtClient`.
//!
//! Maps internal errors to the core port error and memoizes every outcome,
//! so one family costs one request per run whatever the number of devices.

use async_trait::async_trait;
use fwaudit_core::{AdvisoryError, AdvisoryResult, AdvisorySource, VendorFamily};
use tracing::{debug, warn};

use crate::client::PsirtClient;
use crate::error::PsirtError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PsirtError` to core `AdvisoryError`.
fn map_error(err: PsirtError) -> AdvisoryError {
    match err {
        PsirtError::ApiRequestFailed { status, url } => AdvisoryError::Http { status, url },
        PsirtError::NoSource { family } => AdvisoryError::Unsupported { family },
        PsirtError::Network(e) => AdvisoryError::Network {
            message: e.to_string(),
        },
        PsirtError::InvalidUrl(e) => AdvisoryError::Configuration {
            message: e.to_string(),
        },
        PsirtError::Pattern(e) => AdvisoryError::Configuration {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> AdvisorySource for PsirtClient<B> {
    async fn fetch_versions(&self, family: VendorFamily) -> AdvisoryResult<Vec<String>> {
        if let Some(cached) = self.versions.get(&family) {
            debug!(%family, "Version lookup served from cache");
            return cached;
        }

        let outcome = self
            .scrape_versions(family.profile())
            .await
            .map_err(map_error);
        if let Err(ref err) = outcome {
            warn!(%family, error = %err, "Version lookup failed");
        }
        self.versions.insert(family, outcome.clone());
        outcome
    }

    async fn fetch_cves(&self, family: VendorFamily, version: &str) -> AdvisoryResult<Vec<String>> {
        let key = (family, version.to_string());
        if let Some(cached) = self.cves.get(&key) {
            debug!(%family, version, "CVE lookup served from cache");
            return cached;
        }

        let outcome = self
            .scrape_cves(family.profile(), version)
            .await
            .map_err(map_error);
        if let Err(ref err) = outcome {
            warn!(%family, version, error = %err, "CVE lookup failed");
        }
        self.cves.insert(key, outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    const FORTIOS_PAGE: &str = "FortiOS 7.6.3 | FortiOS 7.4.9 | FortiOS 7.4.8";

    #[test]
    fn test_map_error_http() {
        let err = map_error(PsirtError::ApiRequestFailed {
            status: 403,
            url: "https://sec.cloudapps.cisco.com/".to_string(),
        });
        assert_eq!(
            err,
            AdvisoryError::Http {
                status: 403,
                url: "https://sec.cloudapps.cisco.com/".to_string(),
            }
        );
    }

    #[test]
    fn test_map_error_no_source() {
        let err = map_error(PsirtError::NoSource {
            family: VendorFamily::F5BigIp,
        });
        assert_eq!(
            err,
            AdvisoryError::Unsupported {
                family: VendorFamily::F5BigIp
            }
        );
    }

    #[test]
    fn test_map_error_pattern_is_configuration() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        assert!(matches!(
            map_error(PsirtError::Pattern(regex_err)),
            AdvisoryError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_two_devices_of_one_family_fetch_once() {
        let backend = FakeBackend::new().with_page("product=FortiOS", FORTIOS_PAGE);
        let requests = backend.requests();
        let client = PsirtClient::with_backend(backend);

        let first = client.fetch_versions(VendorFamily::FortiOs).await.unwrap();
        let second = client.fetch_versions(VendorFamily::FortiOs).await.unwrap();

        assert_eq!(first, vec!["7.6.3", "7.4.9", "7.4.8"]);
        assert_eq!(first, second);
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_cached() {
        let backend = FakeBackend::new();
        let requests = backend.requests();
        let client = PsirtClient::with_backend(backend);

        for _ in 0..3 {
            let result = client.fetch_versions(VendorFamily::CiscoNexus).await;
            assert!(matches!(
                result,
                Err(AdvisoryError::Http { status: 404, .. })
            ));
        }
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_families_are_cached_separately() {
        let backend = FakeBackend::new()
            .with_page("product=FortiOS", FORTIOS_PAGE)
            .with_page("product=FortiManager", "FortiManager 7.4.8");
        let requests = backend.requests();
        let client = PsirtClient::with_backend(backend);

        client.fetch_versions(VendorFamily::FortiOs).await.unwrap();
        let fmg = client
            .fetch_versions(VendorFamily::FortiManager)
            .await
            .unwrap();

        assert_eq!(fmg, vec!["7.4.8"]);
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cves_cached_per_family_and_version() {
        let backend = FakeBackend::new()
            .with_page("keyword=17.9.4", "CVE-2023-20198 CVE-2023-20273")
            .with_page("keyword=17.6.5", "nothing here");
        let requests = backend.requests();
        let client = PsirtClient::with_backend(backend);

        let a = client
            .fetch_cves(VendorFamily::CiscoCatalyst, "17.9.4")
            .await
            .unwrap();
        let b = client
            .fetch_cves(VendorFamily::CiscoCatalyst, "17.9.4")
            .await
            .unwrap();
        let c = client
            .fetch_cves(VendorFamily::CiscoCatalyst, "17.6.5")
            .await
            .unwrap();

        assert_eq!(a, vec!["CVE-2023-20198", "CVE-2023-20273"]);
        assert_eq!(a, b);
        assert!(c.is_empty());
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bigip_is_unsupported() {
        let client = PsirtClient::with_backend(FakeBackend::new());
        let result = client.fetch_cves(VendorFamily::F5BigIp, "17.1.3").await;
        assert_eq!(
            result,
            Err(AdvisoryError::Unsupported {
                family: VendorFamily::F5BigIp
            })
        );
    }
}
