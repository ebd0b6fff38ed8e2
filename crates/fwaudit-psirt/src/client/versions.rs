//! Candidate version scraping.

use fwaudit_core::FamilyProfile;
use tracing::debug;

use super::PsirtClient;
use crate::error::{PsirtError, PsirtResult};
use crate::http::HttpBackend;
use crate::parsing::extract_versions;
use crate::url::build_versions_url;

impl<B: HttpBackend> PsirtClient<B> {
    /// Fetch a family's release listing and extract candidate versions,
    /// newest first. Uncached.
    pub(crate) async fn scrape_versions(&self, profile: &FamilyProfile) -> PsirtResult<Vec<String>> {
        let pattern = profile.version_pattern.ok_or(PsirtError::NoSource {
            family: profile.family,
        })?;
        let url = build_versions_url(profile)?;
        let body = self.backend.get_text(&url).await?;
        let versions = extract_versions(pattern, &body)?;
        debug!(family = %profile.family, count = versions.len(), "Extracted candidate versions");
        Ok(versions)
    }
}
