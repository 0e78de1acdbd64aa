//! Persisted `key=value` configuration file.
//!
//! The file is meant for connection details reused across sessions:
//!
//! ```text
//! host=192.168.0.10
//! port=57890
//! ```
//!
//! Blank lines and `#`/`;` comments are skipped. Lines without `=` and
//! unknown keys are ignored. A later duplicate key replaces an earlier one.

use std::path::Path;

use super::ConfigError;
use super::options::{Key, Options, Value};

/// Options read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Parsed entries, all values textual except `args`
    pub options: Options,
}

impl ConfigFile {
    /// Loads options from a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(Self::parse(&content))
    }

    /// Parses options from file content. Never fails.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut options = Options::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!("Ignoring malformed config line {}: missing '='", index + 1);
                continue;
            };

            let key = match key.trim().parse::<Key>() {
                Ok(key) => key,
                Err(e) => {
                    tracing::debug!("Ignoring config line {}: {e}", index + 1);
                    continue;
                }
            };

            let value = value.trim();
            let value = if key == Key::Args {
                Value::List(value.split_whitespace().map(str::to_string).collect())
            } else {
                Value::text(value)
            };

            if key == Key::Password {
                tracing::warn!("Config file stores a password; consider removing it");
            }

            options.insert(key, value);
        }

        Self { options }
    }
}

/// Generates a configuration file template with comments.
#[must_use]
pub fn default_config_template() -> String {
    r"# Troop client configuration
#
# Used with --config when connecting to the same server repeatedly.
# One key=value pair per line. Do not store your password here.

host=localhost
port=57890

# Participant name shown to other users
# name=your_name

# Live-coding language or interpreter executable (default: foxdot)
# lang=foxdot

# Extra interpreter arguments, separated by spaces
# args=
"
    .to_string()
}

/// Writes the configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
