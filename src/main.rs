//! Troop Client
//!
//! Entry point for the troop-client application.

use std::process::ExitCode;

use troop_client::config::{
    Cli, Command, ConfigError, Defaults, Resolver, TerminalPrompter, write_default_config,
};
use troop_client::session::{SessionConfig, SessionFactory};

mod app;

use app::{ReportFactory, exit_code, print_config_hint, setup_tracing};

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

    setup_tracing();

    let config = match resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("{config}");

    match ReportFactory.create(config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Session error: {e}");
            exit_code::session_error()
        }
    }
}

/// Resolves the session configuration, prompting on the terminal if needed.
fn resolve(cli: &Cli) -> Result<SessionConfig, ConfigError> {
    let resolver = Resolver::new(Defaults::default());
    let options = resolver.resolve(cli, &mut TerminalPrompter)?;
    SessionConfig::try_from(options)
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
