//! Route53-DDNS: one-shot Dynamic DNS updater for AWS Route 53
//!
//! Entry point for the route53-ddns application.

use route53_ddns::config::{Cli, Command, write_default_config};
use route53_ddns::update::UpdateError;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, failure_message, print_config_hint, success_message};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    run_application(&cli)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one update and reports the result.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(cli: &Cli) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run::execute(cli)) {
        Ok(address) => {
            println!("{}", success_message(address));
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            if let UpdateError::Config(config_error) = &e {
                print_config_hint(config_error);
            }
            exit_code::for_error(&e)
        }
    }
}
