//! The configuration mapping threaded through every resolution stage.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Option names understood by the resolver.
///
/// Ordering follows declaration order, which is also the order fields
/// are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Server host name or address
    Host,
    /// Server port
    Port,
    /// Participant name
    Name,
    /// Server password
    Password,
    /// Live-coding language or interpreter executable
    Lang,
    /// Session logging flag
    Logging,
    /// Extra interpreter arguments
    Args,
    /// Whether connection info had to be requested from the operator
    GetInfo,
}

impl Key {
    /// Fields that must be present before a session can be created, in prompt order.
    pub const REQUIRED: [Self; 4] = [Self::Host, Self::Port, Self::Name, Self::Password];

    /// Returns the textual name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Port => "port",
            Self::Name => "name",
            Self::Password => "password",
            Self::Lang => "lang",
            Self::Logging => "logging",
            Self::Args => "args",
            Self::GetInfo => "get_info",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown option name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(Self::Host),
            "port" => Ok(Self::Port),
            "name" => Ok(Self::Name),
            "password" => Ok(Self::Password),
            "lang" => Ok(Self::Lang),
            "logging" => Ok(Self::Logging),
            "args" => Ok(Self::Args),
            "get_info" => Ok(Self::GetInfo),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unconverted text, as read from a flag, file, or prompt
    Text(String),
    /// Port number
    Integer(u16),
    /// Flag
    Bool(bool),
    /// Ordered arguments
    List(Vec<String>),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns true for text that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Configuration mapping from option name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    values: BTreeMap<Key, Value>,
}

impl Options {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: Key, value: Value) {
        self.values.insert(key, value);
    }

    /// Builder form of [`Options::insert`].
    #[must_use]
    pub fn with(mut self, key: Key, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Removes and returns the value stored for `key`.
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        self.values.remove(&key)
    }

    /// Returns true if `key` holds a usable value.
    ///
    /// Blank text counts as absent.
    #[must_use]
    pub fn has(&self, key: Key) -> bool {
        self.get(key).is_some_and(|v| !v.is_blank())
    }

    /// Overwrites entries in `self` with every entry from `other`.
    pub fn extend(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no entries are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(Key, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Displays every entry except the password, which is masked.
impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if key == Key::Password {
                write!(f, "{key}: ***")?;
            } else {
                write!(f, "{key}: {value}")?;
            }
        }
        f.write_str("}")
    }
}
