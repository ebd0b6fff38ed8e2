//! Vendor family table.
//!
//! Every hardware family the audit understands is described by a single
//! [`FamilyProfile`] row: where its advisories live, how versions are pulled
//! out of them, and which literals stand in when scraping yields nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware family, derived from a device's hardware model string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorFamily {
    /// Fortinet FortiGate firewalls running FortiOS.
    FortiOs,
    /// Fortinet FortiManager appliances.
    FortiManager,
    /// Cisco Catalyst switches running IOS-XE.
    CiscoCatalyst,
    /// Cisco Nexus switches running NX-OS.
    CiscoNexus,
    /// F5 BIG-IP load balancers.
    F5BigIp,
}

/// One row of the vendor family table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyProfile {
    pub family: VendorFamily,
    /// Product label used in advisory URLs and advisory-mode output.
    pub product: &'static str,
    /// Page scraped for candidate versions.
    pub versions_url: Option<&'static str>,
    /// Extraction pattern for candidate versions. Capture group 1 is used
    /// when present, the whole match otherwise.
    pub version_pattern: Option<&'static str>,
    /// CVE lookup page; `{version}` is replaced by the URL-encoded version token.
    pub cve_url_template: Option<&'static str>,
    /// Maintenance version used when no scraped candidate qualifies.
    pub fallback_maintenance: &'static str,
    /// Evolution version used when no scraped candidate qualifies.
    pub fallback_evolution: &'static str,
    /// Appended to branch-mode recommendations.
    pub display_suffix: &'static str,
    /// Whether branch mode scrapes this family at all.
    pub scraped_in_branch_mode: bool,
}

const FORTINET_VERSION_PATTERN: &str = r"\b(7\.[0-6]\.[0-9])\b";

const PROFILES: [FamilyProfile; 5] = [
    FamilyProfile {
        family: VendorFamily::FortiOs,
        product: "FortiOS",
        versions_url: Some("https://www.fortiguard.com/psirt?product=FortiOS"),
        version_pattern: Some(FORTINET_VERSION_PATTERN),
        cve_url_template: Some("https://www.fortiguard.com/psirt?product=FortiOS&version={version}"),
        fallback_maintenance: "7.4.8",
        fallback_evolution: "7.6.4",
        display_suffix: " (M)",
        scraped_in_branch_mode: true,
    },
    FamilyProfile {
        family: VendorFamily::FortiManager,
        product: "FortiManager",
        versions_url: Some("https://www.fortiguard.com/psirt?product=FortiManager"),
        version_pattern: Some(FORTINET_VERSION_PATTERN),
        cve_url_template: Some(
            "https://www.fortiguard.com/psirt?product=FortiManager&version={version}",
        ),
        fallback_maintenance: "7.4.8",
        fallback_evolution: "7.6.4",
        display_suffix: "",
        scraped_in_branch_mode: true,
    },
    FamilyProfile {
        family: VendorFamily::CiscoCatalyst,
        product: "IOS-XE",
        versions_url: Some(
            "https://sec.cloudapps.cisco.com/security/center/publicationListing.x?product=Cisco&keyword=IOS%20XE",
        ),
        version_pattern: Some(r"\b(17\.\d{1,2}\.\d{1,2}[a-z]?)\b"),
        cve_url_template: Some(
            "https://sec.cloudapps.cisco.com/security/center/publicationListing.x?product=Cisco&keyword={version}",
        ),
        fallback_maintenance: "17.9.6a",
        fallback_evolution: "17.12.4",
        display_suffix: "",
        scraped_in_branch_mode: false,
    },
    FamilyProfile {
        family: VendorFamily::CiscoNexus,
        product: "NX-OS",
        versions_url: Some(
            "https://sec.cloudapps.cisco.com/security/center/publicationListing.x?product=Cisco&keyword=NX-OS",
        ),
        version_pattern: Some(r"\b(10\.\d{1,2}\(\d{1,2}\)M?)"),
        cve_url_template: Some(
            "https://sec.cloudapps.cisco.com/security/center/publicationListing.x?product=Cisco&keyword={version}",
        ),
        fallback_maintenance: "10.4(6)M",
        fallback_evolution: "10.5(1)M",
        display_suffix: "",
        scraped_in_branch_mode: false,
    },
    FamilyProfile {
        family: VendorFamily::F5BigIp,
        product: "BIG-IP",
        versions_url: None,
        version_pattern: None,
        cve_url_template: None,
        fallback_maintenance: "17.1.4",
        fallback_evolution: "18.1.0",
        display_suffix: "",
        scraped_in_branch_mode: false,
    },
];

impl VendorFamily {
    /// All families, in table order.
    pub const ALL: [Self; 5] = [
        Self::FortiOs,
        Self::FortiManager,
        Self::CiscoCatalyst,
        Self::CiscoNexus,
        Self::F5BigIp,
    ];

    /// Classify a hardware model string.
    ///
    /// Matching is by substring, checked in this order: `Forti` (FortiOS when
    /// the model also contains `Gate`, FortiManager otherwise), `Catalyst`,
    /// `Nexus`, `BIG-IP`.
    pub fn classify(hardware: &str) -> Option<Self> {
        if hardware.contains("Forti") {
            return Some(if hardware.contains("Gate") {
                Self::FortiOs
            } else {
                Self::FortiManager
            });
        }
        if hardware.contains("Catalyst") {
            return Some(Self::CiscoCatalyst);
        }
        if hardware.contains("Nexus") {
            return Some(Self::CiscoNexus);
        }
        if hardware.contains("BIG-IP") {
            return Some(Self::F5BigIp);
        }
        None
    }

    /// The table row for this family.
    #[must_use]
    pub fn profile(self) -> &'static FamilyProfile {
        match self {
            Self::FortiOs => &PROFILES[0],
            Self::FortiManager => &PROFILES[1],
            Self::CiscoCatalyst => &PROFILES[2],
            Self::CiscoNexus => &PROFILES[3],
            Self::F5BigIp => &PROFILES[4],
        }
    }

    /// Stable identifier used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FortiOs => "forti_os",
            Self::FortiManager => "forti_manager",
            Self::CiscoCatalyst => "cisco_catalyst",
            Self::CiscoNexus => "cisco_nexus",
            Self::F5BigIp => "f5_big_ip",
        }
    }

    /// Human-readable vendor name.
    #[must_use]
    pub const fn vendor(self) -> &'static str {
        match self {
            Self::FortiOs | Self::FortiManager => "Fortinet",
            Self::CiscoCatalyst | Self::CiscoNexus => "Cisco",
            Self::F5BigIp => "F5",
        }
    }
}

impl FamilyProfile {
    /// Whether the given mode issues a version scrape for this family.
    #[must_use]
    pub const fn scrapes_versions(&self, advisory_mode: bool) -> bool {
        if self.versions_url.is_none() || self.version_pattern.is_none() {
            return false;
        }
        advisory_mode || self.scraped_in_branch_mode
    }

    /// Whether CVE lookups are available for this family.
    #[must_use]
    pub const fn supports_cve_lookup(&self) -> bool {
        self.cve_url_template.is_some()
    }
}

impl fmt::Display for VendorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fortinet() {
        assert_eq!(VendorFamily::classify("FortiGate 61E"), Some(VendorFamily::FortiOs));
        assert_eq!(
            VendorFamily::classify("FortiGate VM64-KVM"),
            Some(VendorFamily::FortiOs)
        );
        assert_eq!(
            VendorFamily::classify("FortiManager VM64"),
            Some(VendorFamily::FortiManager)
        );
        assert_eq!(
            VendorFamily::classify("FortiAnalyzer 400F"),
            Some(VendorFamily::FortiManager)
        );
    }

    #[test]
    fn test_classify_cisco_and_f5() {
        assert_eq!(
            VendorFamily::classify("Cisco Catalyst 9410R"),
            Some(VendorFamily::CiscoCatalyst)
        );
        assert_eq!(
            VendorFamily::classify("Cisco Nexus 93240YC-FX2"),
            Some(VendorFamily::CiscoNexus)
        );
        assert_eq!(
            VendorFamily::classify("F5 BIG-IP VE-200M"),
            Some(VendorFamily::F5BigIp)
        );
        assert_eq!(VendorFamily::classify("Juniper SRX345"), None);
    }

    #[test]
    fn test_profiles_match_family() {
        for family in VendorFamily::ALL {
            assert_eq!(family.profile().family, family);
        }
    }

    #[test]
    fn test_fallback_literals() {
        let nexus = VendorFamily::CiscoNexus.profile();
        assert_eq!(nexus.fallback_maintenance, "10.4(6)M");
        assert_eq!(nexus.fallback_evolution, "10.5(1)M");
        let catalyst = VendorFamily::CiscoCatalyst.profile();
        assert_eq!(catalyst.fallback_maintenance, "17.9.6a");
        assert_eq!(VendorFamily::F5BigIp.profile().fallback_evolution, "18.1.0");
        assert_eq!(VendorFamily::FortiOs.profile().display_suffix, " (M)");
        assert_eq!(VendorFamily::FortiManager.profile().display_suffix, "");
    }

    #[test]
    fn test_scraping_by_mode() {
        let fortios = VendorFamily::FortiOs.profile();
        assert!(fortios.scrapes_versions(false));
        assert!(fortios.scrapes_versions(true));

        let nexus = VendorFamily::CiscoNexus.profile();
        assert!(!nexus.scrapes_versions(false));
        assert!(nexus.scrapes_versions(true));

        let bigip = VendorFamily::F5BigIp.profile();
        assert!(!bigip.scrapes_versions(false));
        assert!(!bigip.scrapes_versions(true));
        assert!(!bigip.supports_cve_lookup());
    }

    #[test]
    fn test_cve_templates_have_placeholder() {
        for family in VendorFamily::ALL {
            if let Some(template) = family.profile().cve_url_template {
                assert!(template.contains("{version}"), "{family} template");
            }
        }
    }
}
