//! Configuration for the RCON client
//!
//! Centralized configuration with sensible defaults. The caller (config
//! store, CLI flags) resolves all values before construction; a Connection
//! reads them exactly once and never re-reads. A changed password takes
//! effect only on the next freshly constructed Connection.

use std::time::Duration;

/// Default deadline for connect, auth response, and command response
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection configuration
#[derive(Debug, Clone)]
pub struct RconConfig {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Server hostname or IP address
    pub host: String,

    /// RCON listener port (the game server ships with 2755)
    pub port: u16,

    /// Shared-secret password for the auth handshake
    pub password: String,

    // -------------------------------------------------------------------------
    // Deadlines
    // -------------------------------------------------------------------------
    /// Deadline for the TCP connect
    pub connect_timeout: Duration,

    /// Deadline for the auth response frame
    pub auth_timeout: Duration,

    /// Deadline for a command response frame
    pub command_timeout: Duration,
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 2755,
            password: String::new(),
            connect_timeout: DEFAULT_TIMEOUT,
            auth_timeout: DEFAULT_TIMEOUT,
            command_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RconConfig {
    /// Create a new config builder
    pub fn builder() -> RconConfigBuilder {
        RconConfigBuilder::default()
    }
}

/// Builder for RconConfig
#[derive(Default)]
pub struct RconConfigBuilder {
    config: RconConfig,
}

impl RconConfigBuilder {
    /// Set the server hostname or IP address
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the RCON listener port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the auth password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the TCP connect deadline
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the auth response deadline
    pub fn auth_timeout(mut self, timeout: Duration) -> Self {
        self.config.auth_timeout = timeout;
        self
    }

    /// Set the command response deadline
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    pub fn build(self) -> RconConfig {
        self.config
    }
}
