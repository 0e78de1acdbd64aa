//! Interactive collection of connection details.

use dialoguer::{Input, Password};

use super::ConfigError;
use super::coerce::parse_port;
use super::options::Key;

/// Source of operator answers.
///
/// Implementations block until an answer is available.
pub trait Prompter {
    /// Reads a line of text. An empty answer yields `default` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Prompt`] if reading fails.
    fn read_text(
        &mut self,
        field: Key,
        label: &str,
        default: Option<&str>,
    ) -> Result<String, ConfigError>;

    /// Reads a secret without echoing it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Prompt`] if reading fails.
    fn read_secret(&mut self, field: Key, label: &str) -> Result<String, ConfigError>;
}

/// Prompts on the controlling terminal.
///
/// Port answers are validated and re-asked until they parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_text(
        &mut self,
        field: Key,
        label: &str,
        default: Option<&str>,
    ) -> Result<String, ConfigError> {
        let mut input = Input::<String>::new().with_prompt(label);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if field == Key::Port {
            input = input.validate_with(|s: &String| -> Result<(), String> {
                parse_port(s).map(|_| ()).map_err(|e| e.to_string())
            });
        }

        input.interact_text().map_err(|e| prompt_error(field, e))
    }

    fn read_secret(&mut self, field: Key, label: &str) -> Result<String, ConfigError> {
        Password::new()
            .with_prompt(label)
            .interact()
            .map_err(|e| prompt_error(field, e))
    }
}

fn prompt_error(field: Key, source: dialoguer::Error) -> ConfigError {
    ConfigError::Prompt {
        field: field.as_str(),
        source,
    }
}
