//! Subcommands and their arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use fwaudit_core::{AuditMode, BuiltinInventory, Device, InventoryError, load_inventory};
use fwaudit_psirt::MAX_RETRIES;
use fwaudit_report::DEFAULT_REPORT_PATH;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Audit the inventory and write the HTML report
    Audit(AuditArgs),

    /// Print the device inventory with the detected vendor family
    Inventory(InventorySource),

    /// Print the vendor family table
    Families,
}

/// Where the devices come from.
#[derive(Debug, Clone, Args)]
pub struct InventorySource {
    /// JSON inventory file; takes precedence over --builtin
    #[arg(long, env = "FWAUDIT_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Compiled-in inventory to use when no file is given (production, lab)
    #[arg(long, default_value = "production")]
    pub builtin: BuiltinInventory,
}

impl InventorySource {
    /// Load the selected inventory.
    pub fn load(&self) -> Result<Vec<Device>, InventoryError> {
        match &self.inventory {
            Some(path) => load_inventory(path),
            None => Ok(self.builtin.devices()),
        }
    }

    /// Human-readable name of the selected inventory.
    pub fn describe(&self) -> String {
        self.inventory.as_deref().map_or_else(
            || format!("built-in {}", self.builtin),
            |path: &Path| path.display().to_string(),
        )
    }
}

/// Arguments of the `audit` command.
#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Audit mode: branch (maintenance + evolution) or advisory (recommended + CVEs)
    #[arg(short, long, env = "FWAUDIT_MODE", default_value = "branch")]
    pub mode: AuditMode,

    /// Path of the HTML report
    #[arg(short, long, env = "FWAUDIT_OUTPUT", default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: InventorySource,

    /// Per-request timeout in seconds (default 15 for branch, 20 for advisory)
    #[arg(long, env = "FWAUDIT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Retries for 5xx and network errors, with exponential backoff (0-10)
    #[arg(
        long,
        env = "FWAUDIT_RETRIES",
        default_value = "0",
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_RETRIES))
    )]
    pub retries: u8,

    /// Skip all network lookups and use the fallback versions
    #[arg(long, env = "FWAUDIT_OFFLINE")]
    pub offline: bool,

    /// Print the report as JSON on stdout instead of progress output
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_source() {
        let source = InventorySource {
            inventory: None,
            builtin: BuiltinInventory::Lab,
        };
        assert_eq!(source.load().unwrap().len(), 11);
        assert_eq!(source.describe(), "built-in lab");
    }

    #[test]
    fn test_file_source_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "EDGE-1", "hardware": "FortiGate 40F", "current": "FortiOS 7.2.8"}}]"#
        )
        .unwrap();

        let source = InventorySource {
            inventory: Some(file.path().to_path_buf()),
            builtin: BuiltinInventory::Production,
        };
        let devices = source.load().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "EDGE-1");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_inventory_error() {
        let source = InventorySource {
            inventory: Some(PathBuf::from("/nonexistent/devices.json")),
            builtin: BuiltinInventory::Production,
        };
        assert!(matches!(source.load(), Err(InventoryError::Read { .. })));
    }
}
