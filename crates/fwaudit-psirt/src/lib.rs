//! Vendor PSIRT page client.
//!
//! Implements [`fwaudit_core::AdvisorySource`] by fetching the Fortinet and
//! Cisco advisory listings and extracting version strings and CVE
//! identifiers from the raw page text. Every lookup is cached for the life
//! of the client, failures included.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPsirtClient is meant to be used through the AdvisorySource trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPsirtClient;

// Configuration
pub use config::{MAX_RETRIES, PsirtClientConfig};

// Errors
pub use error::{PsirtError, PsirtResult};
