//! Conversion of textual option values into their semantic types.

use super::ConfigError;
use super::options::{Key, Options, Value};

/// Semantic type a textual value is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Port number
    Integer,
    /// `true` only for the text "true", ignoring case and surrounding whitespace
    Bool,
}

/// Keys whose values are not plain text.
pub const COERCIONS: [(Key, Coercion); 3] = [
    (Key::Port, Coercion::Integer),
    (Key::GetInfo, Coercion::Bool),
    (Key::Logging, Coercion::Bool),
];

impl Coercion {
    /// Converts `text` to this type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if an integer conversion fails.
    pub fn apply(self, text: &str) -> Result<Value, ConfigError> {
        match self {
            Self::Integer => parse_port(text).map(Value::Integer),
            Self::Bool => Ok(Value::Bool(parse_bool(text))),
        }
    }
}

/// Applies [`COERCIONS`] to every textual value it names.
///
/// Values that are already typed pass through unchanged.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] for a port that is not a valid number.
pub fn coerce(mut options: Options) -> Result<Options, ConfigError> {
    for (key, coercion) in COERCIONS {
        if let Some(Value::Text(text)) = options.get(key) {
            let value = coercion.apply(text)?;
            options.insert(key, value);
        }
    }
    Ok(options)
}

/// Parses a port number.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] if `text` is not a number in `0..=65535`.
pub fn parse_port(text: &str) -> Result<u16, ConfigError> {
    text.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort {
            value: text.to_string(),
            source: e,
        })
}

/// Parses a boolean: only "true" (any case, surrounding whitespace ignored) is true.
#[must_use]
pub fn parse_bool(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}
