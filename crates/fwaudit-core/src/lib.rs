//! Core domain types, vendor family table and audit service for `fwaudit`.
//!
//! The pipeline is linear: an inventory of [`Device`]s goes through the
//! [`AuditService`], which asks an [`AdvisorySource`] for scraped candidates
//! and CVE identifiers, applies the recommendation rules and produces an
//! [`AuditReport`]. Rendering and HTTP live in sibling crates.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod inventory;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AuditMode, AuditReport, AuditRow, AuditStatus, CveFindings, Device, FamilyProfile,
    NOT_AVAILABLE, Recommendation, VendorFamily, Version, sort_newest_first, version_token,
};
pub use inventory::{BuiltinInventory, InventoryError, load_inventory};
pub use ports::{AdvisoryError, AdvisoryResult, AdvisorySource, NoopAdvisorySource};
pub use services::AuditService;
