//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Audit network equipment firmware against vendor recommendations.
#[derive(Parser)]
#[command(name = "fwaudit")]
#[command(about = "Audit network equipment firmware against vendor PSIRT recommendations")]
#[command(version = fwaudit_build_info::LONG_VERSION)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
