//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Load CLI-specific input (inventory selection, output path)
//! 2. Call the audit service or read the family table
//! 3. Format output for the terminal

pub mod audit;
pub mod families;
pub mod inventory;
