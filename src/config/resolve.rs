//! The resolution pipeline.
//!
//! Collect non-interactive sources, check completeness, prompt for what is
//! missing, then coerce values into their semantic types.

use std::path::Path;

use super::ConfigError;
use super::cli::Cli;
use super::coerce::coerce;
use super::defaults::Defaults;
use super::file::ConfigFile;
use super::merge::{Sources, collect};
use super::options::{Key, Options, Value};
use super::prompt::Prompter;

/// Resolves the connection options for a session.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    defaults: Defaults,
}

impl Resolver {
    /// Creates a resolver using the given built-in values.
    #[must_use]
    pub const fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Merges defaults, the config file, the public server, and CLI flags.
    ///
    /// A config file that cannot be read is skipped with a warning.
    #[must_use]
    pub fn collect(&self, cli: &Cli) -> Options {
        let file = cli.config.as_deref().and_then(load_config_file);

        let sources = Sources {
            defaults: &self.defaults,
            cli,
            file: file.as_ref().map(|f| &f.options),
        };

        collect(&sources)
    }

    /// Runs the whole pipeline and returns fully coerced options.
    ///
    /// The prompter is only consulted when a required field is missing,
    /// and only for the missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if prompting fails or a port value is not a number.
    pub fn resolve<P: Prompter>(&self, cli: &Cli, prompter: &mut P) -> Result<Options, ConfigError> {
        let mut options = self.collect(cli);

        let get_info = check_completeness(&options);
        options.insert(Key::GetInfo, Value::Bool(get_info));

        if get_info || cli.cli {
            tracing::debug!("Requesting connection info interactively");
            options = fill_missing(options, &self.defaults, prompter)?;
        }

        coerce(options)
    }
}

/// Returns true if any required field is absent.
#[must_use]
pub fn check_completeness(options: &Options) -> bool {
    Key::REQUIRED.iter().any(|key| !options.has(*key))
}

/// Prompts for each required field that is still absent, in order.
///
/// Fields already present are left untouched.
///
/// # Errors
///
/// Returns [`ConfigError::Prompt`] if reading an answer fails.
pub fn fill_missing<P: Prompter>(
    mut options: Options,
    defaults: &Defaults,
    prompter: &mut P,
) -> Result<Options, ConfigError> {
    for key in Key::REQUIRED {
        if options.has(key) {
            continue;
        }

        let answer = match key {
            Key::Host => prompter.read_text(
                key,
                "Troop Server Address",
                Some(defaults.prompt_host.as_str()),
            )?,
            Key::Port => {
                prompter.read_text(key, "Port Number", Some(defaults.prompt_port.as_str()))?
            }
            Key::Name => prompter.read_text(key, "Enter a name", None)?.replace(' ', "_"),
            _ => prompter.read_secret(key, "Password")?,
        };

        options.insert(key, Value::Text(answer));
    }

    Ok(options)
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    match ConfigFile::load(path) {
        Ok(file) => Some(file),
        Err(e) => {
            tracing::warn!("Unable to load configuration: {e}");
            None
        }
    }
}
