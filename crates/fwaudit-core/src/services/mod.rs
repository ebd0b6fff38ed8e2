//! Core services.
//!
//! `recommender` holds the pure recommendation rules; `audit_service`
//! drives them over an inventory through the advisory port.

pub mod audit_service;
pub mod recommender;

pub use audit_service::AuditService;
pub use recommender::{
    apply_overrides, derive_status, recommend_advisory, recommend_branch, select_evolution,
    select_maintenance,
};
