//! Error types for configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from reading the config file, coercing values,
/// prompting the operator, and building the session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Port value is not a valid port number.
    #[error("Invalid port '{value}': {source}")]
    InvalidPort {
        /// The text that failed to convert
        value: String,
        /// Underlying parse error
        #[source]
        source: std::num::ParseIntError,
    },

    /// Interpreter mode is empty.
    #[error("Invalid mode '{value}': expected a language name or an executable path")]
    InvalidMode {
        /// The invalid value provided
        value: String,
    },

    /// Required field still absent when building the session configuration.
    #[error("Missing required field: {field}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
    },

    /// Field holds a value of the wrong semantic type.
    #[error("Field '{field}' has the wrong type: expected {expected}")]
    WrongType {
        /// Name of the field
        field: &'static str,
        /// Name of the expected type
        expected: &'static str,
    },

    /// Reading an answer from the terminal failed.
    #[error("Failed to read {field} from terminal: {source}")]
    Prompt {
        /// Field being prompted for
        field: &'static str,
        /// Underlying terminal error
        #[source]
        source: dialoguer::Error,
    },
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequired { field }
    }
}
