//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no domain transforms.

pub mod tables;

pub use tables::{print_banner, print_separator, truncate_string, yes_no};
