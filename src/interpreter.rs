//! Live-coding language selection.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Interpreter the client pipes code to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interpreter {
    /// FoxDot (Python)
    FoxDot,
    /// Tidal Cycles (Haskell)
    TidalCycles,
    /// Sonic Pi
    SonicPi,
    /// `SuperCollider` (sclang)
    SuperCollider,
    /// No interpreter; text editing only
    None,
    /// Any program that reads code from stdin
    Executable(PathBuf),
}

impl Interpreter {
    /// Parses a mode name, falling back to an executable path for unknown names.
    ///
    /// Names are matched ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMode`] for blank input.
    pub fn parse(mode: &str) -> Result<Self, ConfigError> {
        let trimmed = mode.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidMode {
                value: mode.to_string(),
            });
        }

        Ok(match trimmed.to_lowercase().as_str() {
            "foxdot" => Self::FoxDot,
            "tidalcycles" | "tidal" => Self::TidalCycles,
            "sonicpi" | "sonic-pi" => Self::SonicPi,
            "supercollider" | "sc" => Self::SuperCollider,
            "none" => Self::None,
            _ => Self::Executable(PathBuf::from(trimmed)),
        })
    }

    /// Returns true if code is sent to a program at a user-supplied path.
    #[must_use]
    pub const fn is_executable(&self) -> bool {
        matches!(self, Self::Executable(_))
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FoxDot => write!(f, "FoxDot"),
            Self::TidalCycles => write!(f, "TidalCycles"),
            Self::SonicPi => write!(f, "SonicPi"),
            Self::SuperCollider => write!(f, "SuperCollider"),
            Self::None => write!(f, "None"),
            Self::Executable(path) => write!(f, "{}", path.display()),
        }
    }
}
