//! Device inventories.
//!
//! Two inventories are compiled in. Others can be supplied as a JSON array
//! of device objects.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::domain::Device;

/// Errors loading an inventory file.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read inventory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inventory {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inventory {} contains no devices", path.display())]
    Empty { path: PathBuf },
}

/// Compiled-in inventory tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinInventory {
    /// The production estate.
    #[default]
    Production,
    /// A mixed lab estate spread across several release branches.
    Lab,
}

impl BuiltinInventory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Lab => "lab",
        }
    }

    /// The devices of this table.
    #[must_use]
    pub fn devices(self) -> Vec<Device> {
        let table: &[(&str, &str, &str)] = match self {
            Self::Production => PRODUCTION,
            Self::Lab => LAB,
        };
        table
            .iter()
            .map(|(name, hardware, current)| Device::new(*name, *hardware, *current))
            .collect()
    }
}

impl fmt::Display for BuiltinInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinInventory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "lab" => Ok(Self::Lab),
            other => Err(format!(
                "unknown inventory '{other}' (expected 'production' or 'lab')"
            )),
        }
    }
}

const PRODUCTION: &[(&str, &str, &str)] = &[
    ("C5FIRSIT01", "FortiGate 61E", "FortiOS 7.4.7M"),
    ("C6FIRSIT01", "FortiGate 61E", "FortiOS 7.4.7M"),
    ("FW-MAIN-ONEDC-1", "FortiGate 1100E", "FortiOS 7.4.7M"),
    ("FW-MAIN-ONEDC-2", "FortiGate 1100E", "FortiOS 7.4.7M"),
    ("FW-EDGE-ONEDC-1", "FortiGate 200F", "FortiOS 7.4.7M"),
    ("FW-EDGE-ONEDC-2", "FortiGate 200F", "FortiOS 7.4.7M"),
    ("FORTIMANAGER", "FortiManager VM64", "FortiManager 7.6.4"),
    ("C5_RV_SW01", "Cisco Catalyst 9410R", "IOS-XE 17.9.4"),
    ("C6_RV_SW01", "Cisco Catalyst 9410R", "IOS-XE 17.9.4"),
    ("CS-ONEDC-1", "Cisco Nexus 93240YC-FX2", "NX-OS 10.3(6)(M)"),
    ("CS-ONEDC-1-spare", "Cisco Nexus 93240YC-FX2", "NX-OS 10.4(5)(M)"),
    ("CS-ONEDC-2", "Cisco Nexus 93240YC-FX2", "NX-OS 10.3(6)(M)"),
    ("CS-ONEDC-2-spare", "Cisco Nexus 93240YC-FX2", "NX-OS 10.4(5)(M)"),
    ("RP-ONEDC-1", "F5 BIG-IP VE-200M", "BIG-IP 17.1.3"),
    ("RP-ONEDC-2", "F5 BIG-IP VE-200M", "BIG-IP 17.1.3"),
];

const LAB: &[(&str, &str, &str)] = &[
    ("US-EDGE-FW01", "FortiGate 100F", "FortiOS 7.0.12M"),
    ("EU-DC-CLUSTER-A", "FortiGate 1500D", "FortiOS 7.2.5M"),
    ("LAB-SANDBOX-FG", "FortiGate VM64-KVM", "FortiOS 6.4.14M"),
    ("GLOBAL-FMG-01", "FortiManager 3000G", "FortiManager 7.4.2"),
    ("FLOOR1-ASW-01", "Cisco Catalyst 9300-48P", "IOS-XE 17.6.5"),
    ("CORE-VSS-STACK", "Cisco Catalyst 9500", "IOS-XE 17.3.3"),
    ("LEAF-POD1-101", "Cisco Nexus 93180YC-EX", "NX-OS 9.3(10)"),
    ("SPINE-CORE-201", "Cisco Nexus 9504", "NX-OS 10.2(3)M"),
    ("PROD-LTM-LB01", "F5 BIG-IP i5800", "BIG-IP 15.1.8"),
    ("EDGE-WAF-02", "F5 BIG-IP i2800", "BIG-IP 16.1.3"),
    ("GLOBAL-GTM-VE", "F5 BIG-IP VE-1G", "BIG-IP 17.0.0"),
];

/// Load an inventory from a JSON file.
///
/// The file must hold a non-empty array of `{"name", "hardware", "current"}`
/// objects.
pub fn load_inventory(path: &Path) -> Result<Vec<Device>, InventoryError> {
    let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let devices: Vec<Device> =
        serde_json::from_str(&content).map_err(|source| InventoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if devices.is_empty() {
        return Err(InventoryError::Empty {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), devices = devices.len(), "Loaded inventory");
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VendorFamily;
    use std::io::Write;

    #[test]
    fn test_builtin_inventories_are_classified() {
        for inventory in [BuiltinInventory::Production, BuiltinInventory::Lab] {
            let devices = inventory.devices();
            assert!(!devices.is_empty());
            for device in devices {
                assert!(device.family().is_some(), "{} unclassified", device.name);
            }
        }
    }

    #[test]
    fn test_production_inventory_contents() {
        let devices = BuiltinInventory::Production.devices();
        assert_eq!(devices.len(), 15);
        let fmg = devices.iter().find(|d| d.name == "FORTIMANAGER").unwrap();
        assert_eq!(fmg.family(), Some(VendorFamily::FortiManager));
        assert_eq!(fmg.current, "FortiManager 7.6.4");
    }

    #[test]
    fn test_builtin_from_str() {
        assert_eq!("lab".parse::<BuiltinInventory>(), Ok(BuiltinInventory::Lab));
        assert_eq!(
            "PROD".parse::<BuiltinInventory>(),
            Ok(BuiltinInventory::Production)
        );
        assert!("staging".parse::<BuiltinInventory>().is_err());
    }

    #[test]
    fn test_load_inventory_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "EDGE-1", "hardware": "FortiGate 40F", "current": "FortiOS 7.2.8"}},
                {{"Name": "CORE-1", "Hardware": "Cisco Nexus 9336C", "Current": "NX-OS 10.2(5)"}}
            ]"#
        )
        .unwrap();

        let devices = load_inventory(file.path()).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].name, "CORE-1");
    }

    #[test]
    fn test_load_inventory_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_inventory(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(InventoryError::Read { .. })));
    }

    #[test]
    fn test_load_inventory_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = load_inventory(file.path());
        assert!(matches!(result, Err(InventoryError::Parse { .. })));
    }

    #[test]
    fn test_load_inventory_empty_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let result = load_inventory(file.path());
        assert!(matches!(result, Err(InventoryError::Empty { .. })));
    }
}
