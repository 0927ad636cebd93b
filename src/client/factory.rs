//! Connection factory
//!
//! Stamps out fresh Connections from resolved configuration. Each logical
//! administrative operation gets its own Connection; none are pooled or
//! reused across operations.

use super::connection::Connection;
use crate::config::RconConfig;
use crate::error::Result;

/// Creates Connections from an already-resolved configuration
///
/// Resolving host, port, and password (including fallbacks and seeded
/// defaults) belongs to the configuration store that supplies the
/// [`RconConfig`]. The factory itself performs no I/O, which keeps the
/// whole client unit-testable against a fake server.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    config: RconConfig,
}

impl ConnectionFactory {
    /// Create a factory around a resolved configuration
    pub fn new(config: RconConfig) -> Self {
        Self { config }
    }

    /// A fresh, disconnected Connection
    pub fn connection(&self) -> Connection {
        Connection::new(self.config.clone())
    }

    /// A fresh Connection, connected and authenticated
    pub async fn connect(&self) -> Result<Connection> {
        let mut conn = self.connection();
        conn.connect().await?;
        Ok(conn)
    }
}
