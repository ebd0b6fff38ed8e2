//! Device records.

use serde::{Deserialize, Serialize};

use super::family::VendorFamily;

/// One inventoried appliance.
///
/// The capitalized keys of older inventory exports (`Name`, `Hardware`,
/// `Current`) are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Host name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Hardware model string, e.g. `FortiGate 200F`.
    #[serde(alias = "Hardware")]
    pub hardware: String,
    /// Running firmware version string, e.g. `FortiOS 7.4.7M`.
    #[serde(alias = "Current")]
    pub current: String,
}

impl Device {
    /// Create a new device record.
    pub fn new(
        name: impl Into<String>,
        hardware: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            hardware: hardware.into(),
            current: current.into(),
        }
    }

    /// The vendor family of this device, if its hardware is recognised.
    #[must_use]
    pub fn family(&self) -> Option<VendorFamily> {
        VendorFamily::classify(&self.hardware)
    }
}
