//! Default values for configuration options.
//!
//! Centralized constants, gathered into an injectable [`Defaults`] value
//! so the resolver never reads them directly.

/// Config file loaded by `--config` when no path is given.
pub const CONFIG_FILE_NAME: &str = "client.cfg";

/// Address of the public Troop server.
pub const PUBLIC_SERVER_HOST: &str = "206.189.25.170";

/// Port of the public Troop server.
pub const PUBLIC_SERVER_PORT: u16 = 57890;

/// Host offered when prompting for the server address.
pub const PROMPT_HOST: &str = "localhost";

/// Port offered when prompting for the server port.
pub const PROMPT_PORT: &str = "57890";

/// Live-coding language used when no mode is configured.
pub const MODE: &str = "foxdot";

/// Host and port pair of a Troop server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Host name or IP address
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl ServerAddress {
    /// Creates a server address.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Built-in values the resolver falls back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Server used by `--public`
    pub public_server: ServerAddress,
    /// Default answer for the host prompt
    pub prompt_host: String,
    /// Default answer for the port prompt
    pub prompt_port: String,
    /// Mode used when neither the config file nor `--mode` sets one
    pub mode: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            public_server: ServerAddress::new(PUBLIC_SERVER_HOST, PUBLIC_SERVER_PORT),
            prompt_host: PROMPT_HOST.to_string(),
            prompt_port: PROMPT_PORT.to_string(),
            mode: MODE.to_string(),
        }
    }
}

impl Defaults {
    /// Replaces the public server address.
    #[must_use]
    pub fn with_public_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.public_server = ServerAddress::new(host, port);
        self
    }

    /// Replaces the default mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}
