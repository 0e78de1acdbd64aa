//! Hand-off from the resolver to the collaborative session.
//!
//! [`SessionConfig`] is the typed form of the resolved options. The
//! session itself lives behind [`SessionFactory`]; nothing here talks to
//! the network.

use std::fmt;

use crate::config::{ConfigError, Key, Options, Value};
use crate::interpreter::Interpreter;

/// Connection parameters for one session.
///
/// All required fields are present and every value has its semantic type.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Server host name or address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Participant name (no spaces)
    pub name: String,
    /// Server password
    pub password: String,
    /// Interpreter code is sent to
    pub lang: Interpreter,
    /// Session logging enabled
    pub logging: bool,
    /// Extra interpreter arguments
    pub args: Vec<String>,
    /// Whether connection info was requested from the operator
    pub get_info: bool,
}

impl TryFrom<Options> for SessionConfig {
    type Error = ConfigError;

    fn try_from(mut options: Options) -> Result<Self, Self::Error> {
        let host = take_text(&mut options, Key::Host)?;
        let name = take_text(&mut options, Key::Name)?.replace(' ', "_");
        let password = take_text(&mut options, Key::Password)?;

        let port = match options.remove(Key::Port) {
            Some(Value::Integer(port)) => port,
            Some(_) => return Err(wrong_type(Key::Port, "integer")),
            None => return Err(ConfigError::missing(Key::Port.as_str())),
        };

        let lang = match options.remove(Key::Lang) {
            Some(Value::Text(mode)) => Interpreter::parse(&mode)?,
            Some(_) => return Err(wrong_type(Key::Lang, "text")),
            None => Interpreter::FoxDot,
        };

        let args = match options.remove(Key::Args) {
            Some(Value::List(args)) => args,
            Some(_) => return Err(wrong_type(Key::Args, "list")),
            None => Vec::new(),
        };

        Ok(Self {
            host,
            port,
            name,
            password,
            lang,
            logging: take_flag(&mut options, Key::Logging)?,
            args,
            get_info: take_flag(&mut options, Key::GetInfo)?,
        })
    }
}

impl SessionConfig {
    /// Returns the server address as `host:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("password", &"***")
            .field("lang", &self.lang)
            .field("logging", &self.logging)
            .field("args", &self.args)
            .field("get_info", &self.get_info)
            .finish()
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session {{ server: {}, name: {}, lang: {}, logging: {}, args: [{}] }}",
            self.address(),
            self.name,
            self.lang,
            self.logging,
            self.args.join(" "),
        )
    }
}

/// Constructs a live session from resolved connection parameters.
///
/// This is the trust boundary: implementations own all network semantics.
pub trait SessionFactory {
    /// The session produced.
    type Session;
    /// Error raised when the session cannot be created.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a session.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn create(&self, config: SessionConfig) -> Result<Self::Session, Self::Error>;
}

fn take_text(options: &mut Options, key: Key) -> Result<String, ConfigError> {
    match options.remove(key) {
        Some(Value::Text(text)) if !text.trim().is_empty() => Ok(text),
        Some(Value::Text(_)) | None => Err(ConfigError::missing(key.as_str())),
        Some(_) => Err(wrong_type(key, "text")),
    }
}

fn take_flag(options: &mut Options, key: Key) -> Result<bool, ConfigError> {
    match options.remove(key) {
        Some(Value::Bool(flag)) => Ok(flag),
        Some(_) => Err(wrong_type(key, "boolean")),
        None => Ok(false),
    }
}

const fn wrong_type(key: Key, expected: &'static str) -> ConfigError {
    ConfigError::WrongType {
        field: key.as_str(),
        expected,
    }
}
