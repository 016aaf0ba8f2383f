mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::highlight_cmd::highlight_command;
use crate::commands::plot_cmd::plot_command;
use crate::commands::process_cmd::process_command;
use crate::commands::report_cmd::report_command;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Process { .. } => process_command(cmd),
        cmd @ Commands::Highlight { .. } => highlight_command(cmd),
        cmd @ Commands::Report { .. } => report_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "optivis", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
