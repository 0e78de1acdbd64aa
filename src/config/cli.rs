//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.
//! Values stay textual here; conversion happens in the coercion stage.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Troop Client: collaborative interface for live coding
///
/// Resolves the connection to a Troop server from flags, a config file,
/// and terminal prompts.
#[derive(Debug, Parser)]
#[command(name = "troop-client")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Use the command line to enter connection info
    #[arg(short = 'i', long)]
    pub cli: bool,

    /// Connect to the public Troop server
    #[arg(short, long)]
    pub public: bool,

    /// IP address of the machine running the Troop server
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port of the Troop server (default 57890)
    #[arg(short = 'P', long)]
    pub port: Option<String>,

    /// Name shown to other participants
    #[arg(short, long)]
    pub name: Option<String>,

    /// Server password (prefer the interactive prompt)
    #[arg(long)]
    pub password: Option<String>,

    /// Live-coding language (FoxDot, TidalCycles, SonicPi, SuperCollider, None)
    /// or a path to an interpreter executable [default: foxdot]
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Extra arguments for the interpreter (consumes the rest of the command line)
    #[arg(short, long, num_args = 1.., allow_hyphen_values = true, value_name = "ARG")]
    pub args: Vec<String>,

    /// Load connection info from 'client.cfg' or the given file
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = defaults::CONFIG_FILE_NAME,
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    /// Enable session logging
    #[arg(short, long)]
    pub log: bool,
}

/// Subcommands for troop-client
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a configuration file template
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
