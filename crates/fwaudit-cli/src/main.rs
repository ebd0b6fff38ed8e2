//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging and dispatches to the handlers. Every
//! failure is mapped to a `CliError` whose exit code reaches the shell.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use fwaudit_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

const VERBOSE_FILTER: &str =
    "warn,fwaudit_core=debug,fwaudit_psirt=debug,fwaudit_report=debug,fwaudit_cli=debug";

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => {
            let config = CliConfig::from_args(&args)?;
            let ctx = bootstrap(&config)?;
            handlers::audit::execute(&ctx, &args).await?;
        }
        Commands::Inventory(source) => {
            handlers::inventory::execute(&source)?;
        }
        Commands::Families => {
            handlers::families::execute()?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so FWAUDIT_* variables reach clap
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(err) = Cli::command().print_help() {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
