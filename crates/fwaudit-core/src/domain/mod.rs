//! Core domain types.
//!
//! Pure data types with no I/O dependencies.

pub mod audit;
pub mod device;
pub mod family;
pub mod version;

pub use audit::{
    AuditMode, AuditReport, AuditRow, AuditStatus, CveFindings, NOT_AVAILABLE, Recommendation,
};
pub use device::Device;
pub use family::{FamilyProfile, VendorFamily};
pub use version::{Version, sort_newest_first, version_token};
