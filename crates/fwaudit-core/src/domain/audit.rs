//! Audit results.
//!
//! Pure data types produced by the audit service and consumed by the
//! reporters. Nothing here is persisted; a report is rebuilt on every run.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::device::Device;
use super::family::VendorFamily;

/// Placeholder shown when there is nothing to recommend.
pub const NOT_AVAILABLE: &str = "N/A";

/// How recommendations are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditMode {
    /// Maintenance (same branch) and evolution (next branch) versions.
    #[default]
    Branch,
    /// A single recommended version plus the CVEs of the current version.
    Advisory,
}

impl AuditMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Advisory => "advisory",
        }
    }

    #[must_use]
    pub const fn is_advisory(self) -> bool {
        matches!(self, Self::Advisory)
    }
}

impl fmt::Display for AuditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "branch" => Ok(Self::Branch),
            "advisory" | "cve" => Ok(Self::Advisory),
            other => Err(format!(
                "unknown audit mode '{other}' (expected 'branch' or 'advisory')"
            )),
        }
    }
}

/// Outcome of a CVE lookup for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ids", rename_all = "snake_case")]
pub enum CveFindings {
    /// Sorted, de-duplicated identifiers.
    Found(Vec<String>),
    /// The advisory page listed no identifiers.
    NoneFound,
    /// The advisory page could not be fetched.
    Unknown,
    /// The vendor family has no CVE source.
    NotSupported,
}

impl CveFindings {
    /// Build findings from raw identifiers, sorting and de-duplicating them.
    pub fn from_ids(mut ids: Vec<String>) -> Self {
        ids.sort();
        ids.dedup();
        if ids.is_empty() {
            Self::NoneFound
        } else {
            Self::Found(ids)
        }
    }
}

impl fmt::Display for CveFindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(ids) => f.write_str(&ids.join(", ")),
            Self::NoneFound => f.write_str("None found"),
            Self::Unknown => f.write_str("Unknown"),
            Self::NotSupported => f.write_str("Not Supported"),
        }
    }
}

/// What the audit recommends for one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Recommendation {
    Branch {
        maintenance: String,
        evolution: String,
    },
    Advisory {
        recommended: String,
        cves: CveFindings,
    },
    /// The hardware family is not recognised.
    Unavailable,
}

impl Recommendation {
    /// The version the status is derived from: maintenance in branch mode,
    /// the single recommendation in advisory mode.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Branch { maintenance, .. } => Some(maintenance),
            Self::Advisory { recommended, .. } => Some(recommended),
            Self::Unavailable => None,
        }
    }

    /// Display value for the maintenance / recommended column.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.target().unwrap_or(NOT_AVAILABLE)
    }

    /// Display value for the evolution / CVE column.
    #[must_use]
    pub fn secondary(&self) -> String {
        match self {
            Self::Branch { evolution, .. } => evolution.clone(),
            Self::Advisory { cves, .. } => cves.to_string(),
            Self::Unavailable => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Upgrade status of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Ok,
    UpgradeNeeded,
    CurrentNewer,
    Unknown,
}

impl AuditStatus {
    /// Report label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::UpgradeNeeded => "Upgrade Needed",
            Self::CurrentNewer => "Current newer than recommended",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One device with its recommendation and derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    #[serde(flatten)]
    pub device: Device,
    pub family: Option<VendorFamily>,
    pub recommendation: Recommendation,
    pub status: AuditStatus,
}

/// Result of one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub mode: AuditMode,
    pub generated_at: DateTime<Local>,
    pub rows: Vec<AuditRow>,
}

impl AuditReport {
    /// Count rows with the given status.
    #[must_use]
    pub fn count(&self, status: AuditStatus) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }

    /// True if any device needs an upgrade.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.count(AuditStatus::UpgradeNeeded) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_mode_parse() {
        assert_eq!("branch".parse::<AuditMode>(), Ok(AuditMode::Branch));
        assert_eq!("Advisory".parse::<AuditMode>(), Ok(AuditMode::Advisory));
        assert_eq!("cve".parse::<AuditMode>(), Ok(AuditMode::Advisory));
        assert!("latest".parse::<AuditMode>().is_err());
        assert_eq!(AuditMode::default(), AuditMode::Branch);
    }

    #[test]
    fn test_cve_findings_sorted_unique() {
        let findings = CveFindings::from_ids(vec![
            "CVE-2024-47575".to_string(),
            "CVE-2023-27997".to_string(),
            "CVE-2024-47575".to_string(),
        ]);
        assert_eq!(findings.to_string(), "CVE-2023-27997, CVE-2024-47575");
    }

    #[test]
    fn test_cve_findings_labels() {
        assert_eq!(CveFindings::from_ids(Vec::new()), CveFindings::NoneFound);
        assert_eq!(CveFindings::NoneFound.to_string(), "None found");
        assert_eq!(CveFindings::Unknown.to_string(), "Unknown");
        assert_eq!(CveFindings::NotSupported.to_string(), "Not Supported");
    }

    #[test]
    fn test_recommendation_columns() {
        let branch = Recommendation::Branch {
            maintenance: "7.4.8 (M)".to_string(),
            evolution: "7.6.4 (M)".to_string(),
        };
        assert_eq!(branch.primary(), "7.4.8 (M)");
        assert_eq!(branch.secondary(), "7.6.4 (M)");

        let advisory = Recommendation::Advisory {
            recommended: "NX-OS 10.4(6)M".to_string(),
            cves: CveFindings::Unknown,
        };
        assert_eq!(advisory.target(), Some("NX-OS 10.4(6)M"));
        assert_eq!(advisory.secondary(), "Unknown");

        assert_eq!(Recommendation::Unavailable.primary(), NOT_AVAILABLE);
        assert_eq!(Recommendation::Unavailable.secondary(), NOT_AVAILABLE);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(AuditStatus::Ok.to_string(), "OK");
        assert_eq!(AuditStatus::UpgradeNeeded.to_string(), "Upgrade Needed");
        assert_eq!(
            AuditStatus::CurrentNewer.to_string(),
            "Current newer than recommended"
        );
    }

    #[test]
    fn test_report_counts() {
        let row = |status| AuditRow {
            device: Device::new("d", "FortiGate 61E", "FortiOS 7.4.7M"),
            family: Some(VendorFamily::FortiOs),
            recommendation: Recommendation::Unavailable,
            status,
        };
        let report = AuditReport {
            mode: AuditMode::Branch,
            generated_at: Local::now(),
            rows: vec![
                row(AuditStatus::Ok),
                row(AuditStatus::UpgradeNeeded),
                row(AuditStatus::UpgradeNeeded),
            ],
        };
        assert_eq!(report.count(AuditStatus::UpgradeNeeded), 2);
        assert_eq!(report.count(AuditStatus::Unknown), 0);
        assert!(report.needs_attention());
    }

    #[test]
    fn test_row_serializes_flat_device() {
        let row = AuditRow {
            device: Device::new("RP-ONEDC-1", "F5 BIG-IP VE-200M", "BIG-IP 17.1.3"),
            family: Some(VendorFamily::F5BigIp),
            recommendation: Recommendation::Branch {
                maintenance: "17.1.4".to_string(),
                evolution: "18.1.0".to_string(),
            },
            status: AuditStatus::UpgradeNeeded,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "RP-ONEDC-1");
        assert_eq!(json["family"], "f5_big_ip");
        assert_eq!(json["recommendation"]["mode"], "branch");
        assert_eq!(json["status"], "upgrade_needed");
    }
}
