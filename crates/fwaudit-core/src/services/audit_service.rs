//! Audit service.
//!
//! Walks an inventory once, in order, asking the advisory source for
//! candidates and CVEs and turning every failure into the documented
//! fallback. Nothing returned by the source can abort a run.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::domain::{
    AuditMode, AuditReport, AuditRow, CveFindings, Device, FamilyProfile, Recommendation,
    VendorFamily, version_token,
};
use crate::ports::{AdvisoryError, AdvisorySource};
use crate::services::recommender::{
    apply_overrides, derive_status, recommend_advisory, recommend_branch,
};

/// Produces audit rows for devices.
pub struct AuditService {
    source: Arc<dyn AdvisorySource>,
    mode: AuditMode,
}

impl AuditService {
    /// Create an audit service over an advisory source.
    pub fn new(source: Arc<dyn AdvisorySource>, mode: AuditMode) -> Self {
        Self { source, mode }
    }

    /// The mode recommendations are produced in.
    #[must_use]
    pub const fn mode(&self) -> AuditMode {
        self.mode
    }

    /// Audit every device, in order.
    pub async fn run(&self, devices: &[Device], generated_at: DateTime<Local>) -> AuditReport {
        self.run_with(devices, generated_at, |_| {}).await
    }

    /// Audit every device, in order, calling `on_row` as each row completes.
    pub async fn run_with<F>(
        &self,
        devices: &[Device],
        generated_at: DateTime<Local>,
        mut on_row: F,
    ) -> AuditReport
    where
        F: FnMut(&AuditRow) + Send,
    {
        info!(mode = %self.mode, devices = devices.len(), "Starting audit");
        let mut rows = Vec::with_capacity(devices.len());
        for device in devices {
            let row = self.audit_device(device).await;
            on_row(&row);
            rows.push(row);
        }
        AuditReport {
            mode: self.mode,
            generated_at,
            rows,
        }
    }

    /// Audit a single device.
    pub async fn audit_device(&self, device: &Device) -> AuditRow {
        let family = device.family();
        let recommendation = match family {
            Some(family) => self.recommend(family, device).await,
            None => {
                warn!(device = %device.name, hardware = %device.hardware, "Unrecognised hardware family");
                Recommendation::Unavailable
            }
        };
        let status = derive_status(self.mode, &device.current, &recommendation);
        let (recommendation, status) = apply_overrides(device, recommendation, status);
        debug!(device = %device.name, %status, "Device audited");

        AuditRow {
            device: device.clone(),
            family,
            recommendation,
            status,
        }
    }

    async fn recommend(&self, family: VendorFamily, device: &Device) -> Recommendation {
        let profile = family.profile();
        let candidates = self.candidates(profile).await;
        match self.mode {
            AuditMode::Branch => recommend_branch(profile, &device.current, &candidates),
            AuditMode::Advisory => {
                let cves = self.cves(profile, device).await;
                recommend_advisory(profile, &device.current, &candidates, cves)
            }
        }
    }

    /// Scraped candidates for a family; empty when the family is not scraped
    /// in this mode or the lookup failed.
    async fn candidates(&self, profile: &FamilyProfile) -> Vec<String> {
        if !profile.scrapes_versions(self.mode.is_advisory()) {
            return Vec::new();
        }
        match self.source.fetch_versions(profile.family).await {
            Ok(candidates) => {
                debug!(family = %profile.family, count = candidates.len(), "Candidates");
                candidates
            }
            Err(err) => {
                warn!(family = %profile.family, error = %err, "Version lookup failed, using fallback");
                Vec::new()
            }
        }
    }

    async fn cves(&self, profile: &FamilyProfile, device: &Device) -> CveFindings {
        if !profile.supports_cve_lookup() {
            return CveFindings::NotSupported;
        }
        let Some(token) = version_token(&device.current) else {
            warn!(device = %device.name, current = %device.current, "No version token for CVE lookup");
            return CveFindings::Unknown;
        };
        match self.source.fetch_cves(profile.family, token).await {
            Ok(ids) => CveFindings::from_ids(ids),
            Err(AdvisoryError::Unsupported { .. }) => CveFindings::NotSupported,
            Err(err) => {
                warn!(device = %device.name, error = %err, "CVE lookup failed");
                CveFindings::Unknown
            }
        }
    }
}
