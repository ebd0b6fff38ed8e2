//! Inventory command handler.

use anyhow::{Context, Result};

use crate::commands::InventorySource;
use crate::presentation::{print_separator, truncate_string};

/// Print the selected inventory with the vendor family each device was
/// classified as.
///
/// # Errors
///
/// Fails when the inventory file cannot be read or parsed.
pub fn execute(source: &InventorySource) -> Result<()> {
    let devices = source
        .load()
        .with_context(|| format!("Cannot list {}", source.describe()))?;

    println!("{} device(s) in {}:\n", devices.len(), source.describe());
    println!(
        "{:<20} {:<26} {:<22} Family",
        "Device", "Hardware", "Current"
    );
    print_separator(84);

    for device in &devices {
        let family = device
            .family()
            .map_or("unrecognised", |family| family.as_str());
        println!(
            "{:<20} {:<26} {:<22} {}",
            truncate_string(&device.name, 19),
            truncate_string(&device.hardware, 25),
            truncate_string(&device.current, 21),
            family
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use fwaudit_core::BuiltinInventory;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_inventory_lists() {
        let source = InventorySource {
            inventory: None,
            builtin: BuiltinInventory::Production,
        };
        execute(&source).unwrap();
    }

    #[test]
    fn test_missing_inventory_exit_code() {
        let source = InventorySource {
            inventory: Some(PathBuf::from("/nonexistent/devices.json")),
            builtin: BuiltinInventory::Production,
        };
        let err = CliError::from(execute(&source).unwrap_err());
        assert_eq!(err.exit_code(), 65);
    }
}
