//! Discord Notify: CI webhook notifier
//!
//! Entry point for the discord-notify binary.

use std::process::ExitCode;

use discord_notify::config::{Cli, ResolvedInputs};
use discord_notify::env::ProcessEnv;
use discord_notify::webhook::ReqwestClient;

mod app;
mod run;

use app::{exit_code, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let inputs = ResolvedInputs::resolve(&cli, &ProcessEnv);

    run_application(&inputs)
}

/// Runs the notification with the resolved inputs.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(inputs: &ResolvedInputs) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(inputs, &ProcessEnv, ReqwestClient::new())) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            match e {
                RunError::Send(_) => exit_code::transport_error(),
                _ => exit_code::VALIDATION_ERROR,
            }
        }
    }
}
