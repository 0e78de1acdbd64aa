//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints, and the
//! session factory used by the binary.

use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::EnvFilter;
use troop_client::config::ConfigError;
use troop_client::session::{SessionConfig, SessionFactory};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid port, unreadable prompt, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Session error (exit code 2) - the session could not be created.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn session_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Returns the hint shown for a configuration error, if any.
#[must_use]
pub const fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::InvalidPort { .. } => Some("Ports are whole numbers between 0 and 65535."),
        ConfigError::MissingRequired { .. } => {
            Some("Host, port, name, and password must not be blank.")
        }
        ConfigError::InvalidMode { .. } => Some(
            "Use FoxDot, TidalCycles, SonicPi, SuperCollider, None, or an executable path.",
        ),
        _ => None,
    }
}

/// Builds the diagnostics filter from `RUST_LOG` directives, defaulting to `INFO`.
#[must_use]
pub fn diagnostic_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(directives)
}

/// Sets up the tracing subscriber for diagnostics.
///
/// Verbosity comes from `RUST_LOG` only; `--log` belongs to the session.
pub fn setup_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = diagnostic_filter(&directives);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Reports the resolved connection on stdout.
///
/// Stands in for the editing session, which is provided by the interface
/// front end.
#[derive(Debug, Default)]
pub struct ReportFactory;

impl SessionFactory for ReportFactory {
    type Session = ();
    type Error = io::Error;

    fn create(&self, config: SessionConfig) -> Result<Self::Session, Self::Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "host={}", config.host)?;
        writeln!(out, "port={}", config.port)?;
        writeln!(out, "name={}", config.name)?;
        writeln!(out, "lang={}", config.lang)?;
        writeln!(out, "logging={}", config.logging)?;
        if !config.args.is_empty() {
            writeln!(out, "args={}", config.args.join(" "))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn blank_field_hint_does_not_suggest_cli_flag() {
        let hint = config_hint(&ConfigError::missing("name")).unwrap();

        assert!(hint.contains("must not be blank"));
        assert!(!hint.contains("--cli"));
    }

    #[test]
    fn file_errors_have_no_hint() {
        let error = ConfigError::FileRead {
            path: "client.cfg".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert!(config_hint(&error).is_none());
    }

    #[test]
    fn diagnostics_default_to_info() {
        assert_eq!(diagnostic_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn diagnostics_follow_env_directives() {
        assert_eq!(
            diagnostic_filter("debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
