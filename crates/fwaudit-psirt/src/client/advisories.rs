//! CVE identifier scraping.

use fwaudit_core::FamilyProfile;
use tracing::debug;

use super::PsirtClient;
use crate::error::PsirtResult;
use crate::http::HttpBackend;
use crate::parsing::extract_cves;
use crate::url::build_cve_url;

impl<B: HttpBackend> PsirtClient<B> {
    /// Fetch the advisory page for one release and extract its CVE
    /// identifiers, sorted and unique. Uncached.
    pub(crate) async fn scrape_cves(
        &self,
        profile: &FamilyProfile,
        version: &str,
    ) -> PsirtResult<Vec<String>> {
        let url = build_cve_url(profile, version)?;
        let body = self.backend.get_text(&url).await?;
        let cves = extract_cves(&body);
        debug!(family = %profile.family, version, count = cves.len(), "Extracted CVE identifiers");
        Ok(cves)
    }
}
