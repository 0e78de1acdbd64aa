//! Configuration layer for the Troop client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - `key=value` configuration file parsing ([`ConfigFile`])
//! - The configuration mapping ([`Options`])
//! - Ordered merge stages ([`merge`])
//! - Interactive prompting ([`Prompter`], [`TerminalPrompter`])
//! - Value coercion ([`coerce`])
//! - The resolution pipeline ([`Resolver`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Interactive answers** - only for required fields still missing; never overwrite
//! 2. **Explicit CLI arguments** - `--host`, `--port`, `--name`, `--password`,
//!    `--mode`, `--log`, `--args`
//! 3. **Public server** - `--public` replaces host and port
//! 4. **Config file** - values from `--config`
//! 5. **Built-in defaults** - default mode, logging off
//!
//! `--public` combined with `--host` or `--port` still connects to the explicit
//! host or port, since CLI flags are applied after the public server.
//!
//! # Required Fields
//!
//! `host`, `port`, `name`, and `password` must all be present before a session
//! is created. If any is missing after the non-interactive stages, `get_info`
//! is set and the operator is prompted for exactly the missing fields.
//!
//! # Boolean Flag Semantics
//!
//! `--log` only enables logging: `logging=true` in the config file cannot be
//! turned off from the command line.

mod cli;
pub mod coerce;
pub mod defaults;
mod error;
mod file;
pub mod merge;
mod options;
mod prompt;
mod resolve;

#[cfg(test)]
mod file_tests;
#[cfg(test)]
mod resolve_tests;

pub use cli::{Cli, Command};
pub use defaults::Defaults;
pub use error::ConfigError;
pub use file::{ConfigFile, default_config_template, write_default_config};
pub use options::{Key, Options, UnknownKey, Value};
pub use prompt::{Prompter, TerminalPrompter};
pub use resolve::{Resolver, check_completeness, fill_missing};
