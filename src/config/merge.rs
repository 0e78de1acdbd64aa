//! Non-interactive option collection.
//!
//! Sources are applied by [`PRECEDENCE`], an ordered list of pure merge
//! functions. Each stage may overwrite what earlier stages produced:
//!
//! 1. **Defaults** - default mode, logging off
//! 2. **Config file** - every recognized key in the file
//! 3. **Public server** - host and port of the public server, with `--public`
//! 4. **Command line** - connection, mode, and interpreter flags when given;
//!    a flag with blank text is ignored
//!
//! Interactive answers come last and only fill gaps (see [`super::resolve`]).

use super::cli::Cli;
use super::defaults::Defaults;
use super::options::{Key, Options, Value};

/// Everything the non-interactive stages read from.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    /// Built-in values
    pub defaults: &'a Defaults,
    /// Parsed command line
    pub cli: &'a Cli,
    /// Options from the config file, if one was loaded
    pub file: Option<&'a Options>,
}

/// A merge stage: takes the mapping so far and returns the updated mapping.
pub type Merge = fn(Options, &Sources<'_>) -> Options;

/// Merge stages in ascending precedence, with a label for logging.
pub const PRECEDENCE: [(&str, Merge); 4] = [
    ("defaults", merge_defaults),
    ("config file", merge_config_file),
    ("public server", merge_public_server),
    ("command line", merge_command_line),
];

/// Runs every stage of [`PRECEDENCE`] starting from an empty mapping.
#[must_use]
pub fn collect(sources: &Sources<'_>) -> Options {
    PRECEDENCE
        .iter()
        .fold(Options::new(), |options, (label, merge)| {
            let options = merge(options, sources);
            tracing::trace!("After {label}: {options}");
            options
        })
}

/// Seeds the language mode and the logging flag.
#[must_use]
pub fn merge_defaults(options: Options, sources: &Sources<'_>) -> Options {
    options
        .with(Key::Lang, Value::text(sources.defaults.mode.as_str()))
        .with(Key::Logging, Value::Bool(false))
}

/// Applies every entry from the config file.
#[must_use]
pub fn merge_config_file(mut options: Options, sources: &Sources<'_>) -> Options {
    if let Some(file) = sources.file {
        options.extend(file.clone());
    }
    options
}

/// Replaces host and port with the public server when `--public` is set.
#[must_use]
pub fn merge_public_server(options: Options, sources: &Sources<'_>) -> Options {
    if !sources.cli.public {
        return options;
    }

    let server = &sources.defaults.public_server;
    options
        .with(Key::Host, Value::text(server.host.as_str()))
        .with(Key::Port, Value::Integer(server.port))
}

/// Applies the flags the user passed explicitly.
#[must_use]
pub fn merge_command_line(mut options: Options, sources: &Sources<'_>) -> Options {
    let cli = sources.cli;

    if let Some(host) = given(cli.host.as_deref()) {
        options.insert(Key::Host, Value::text(host));
    }

    if let Some(port) = given(cli.port.as_deref()) {
        options.insert(Key::Port, Value::text(port));
    }

    if let Some(name) = given(cli.name.as_deref()) {
        options.insert(Key::Name, Value::text(name));
    }

    if let Some(password) = given(cli.password.as_deref()) {
        options.insert(Key::Password, Value::text(password));
    }

    if let Some(mode) = given(cli.mode.as_deref()) {
        options.insert(Key::Lang, Value::text(mode));
    }

    // Flags only enable
    if cli.log {
        options.insert(Key::Logging, Value::Bool(true));
    }

    if !cli.args.is_empty() {
        options.insert(Key::Args, Value::List(cli.args.clone()));
    }

    options
}

/// Treats a flag with blank text as not given.
fn given(flag: Option<&str>) -> Option<&str> {
    flag.filter(|value| !value.trim().is_empty())
}
