//! Command-line front end for the firmware audit.
//!
//! `main.rs` parses arguments and dispatches to [`handlers`]; everything the
//! handlers need is wired once in [`bootstrap`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{AuditArgs, Commands, InventorySource};
pub use error::CliError;
pub use parser::Cli;
