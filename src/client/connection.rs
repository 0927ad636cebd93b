//! Connection state machine
//!
//! Owns exactly one TCP socket and drives it through
//! `Disconnected → Connecting → Authenticating → Ready`. Every exit path
//! releases the socket before an error is surfaced, so a Connection is
//! never left half-open. Timeouts are deadline-wrapped futures; an elapsed
//! deadline cancels the pending read outright.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::RconConfig;
use crate::error::{RconError, Result};
use crate::protocol::{self, PacketType};

/// Connection lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Authenticating,
    Ready,
}

/// A single-owner remote-console connection
///
/// One Connection serves one logical administrative operation: connect,
/// issue commands sequentially, disconnect. At most one request is
/// outstanding at a time; issuing a second command before the first
/// resolves is a caller error, not something the client multiplexes.
/// Connections are not pooled and not shared across operations.
pub struct Connection {
    config: RconConfig,

    /// The socket, held only while authenticated
    stream: Option<TcpStream>,

    state: ConnectionState,

    /// Monotonically increasing request id counter
    next_request_id: i32,
}

impl Connection {
    /// Create a disconnected Connection from resolved configuration
    pub fn new(config: RconConfig) -> Self {
        Self {
            config,
            stream: None,
            state: ConnectionState::Disconnected,
            next_request_id: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether the auth handshake has completed on the current socket
    pub fn is_authenticated(&self) -> bool {
        self.state == ConnectionState::Ready
    }

    /// Open the TCP connection and run the auth handshake
    ///
    /// A no-op when already `Ready`. Any prior socket is torn down first.
    /// Fails with [`RconError::Connection`] when the TCP connect errors or
    /// exceeds its deadline, and with [`RconError::Authentication`] when the
    /// server rejects or mangles the handshake; the socket is destroyed
    /// before either error is returned, and the client never retries
    /// silently on the same socket.
    pub async fn connect(&mut self) -> Result<()> {
        if self.state == ConnectionState::Ready {
            return Ok(());
        }

        self.teardown();
        self.state = ConnectionState::Connecting;

        let addr = (self.config.host.as_str(), self.config.port);
        let stream = match timeout(self.config.connect_timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                self.state = ConnectionState::Disconnected;
                return Err(RconError::Connection(format!(
                    "connect to {}:{} failed: {}",
                    self.config.host, self.config.port, e
                )));
            }
            Err(_) => {
                self.state = ConnectionState::Disconnected;
                return Err(RconError::Connection(format!(
                    "connect to {}:{} timed out after {:?}",
                    self.config.host, self.config.port, self.config.connect_timeout
                )));
            }
        };

        // Command round-trips are single small frames
        if let Err(e) = stream.set_nodelay(true) {
            self.state = ConnectionState::Disconnected;
            return Err(e.into());
        }

        tracing::debug!(
            "Connected to {}:{}, authenticating",
            self.config.host,
            self.config.port
        );
        self.state = ConnectionState::Authenticating;

        let mut stream = stream;
        let request_id = self.next_request_id();
        match Self::authenticate(
            &mut stream,
            request_id,
            &self.config.password,
            self.config.auth_timeout,
        )
        .await
        {
            Ok(()) => {
                self.stream = Some(stream);
                self.state = ConnectionState::Ready;
                tracing::debug!("Authenticated with {}:{}", self.config.host, self.config.port);
                Ok(())
            }
            Err(e) => {
                // Dropping the stream closes the socket
                self.state = ConnectionState::Disconnected;
                tracing::warn!(
                    "Handshake with {}:{} failed: {}",
                    self.config.host,
                    self.config.port,
                    e
                );
                Err(e)
            }
        }
    }

    /// Send one console command and return the response body
    ///
    /// Only valid in `Ready`. An elapsed deadline fails with
    /// [`RconError::CommandTimeout`] and tears the socket down; the
    /// Connection is usable again only after an explicit reconnect. The
    /// client never auto-retries.
    pub async fn send_command(&mut self, command: &str) -> Result<String> {
        if self.state != ConnectionState::Ready {
            return Err(RconError::Connection(
                "not connected: call connect() before sending commands".to_string(),
            ));
        }

        let request_id = self.next_request_id();
        let deadline = self.config.command_timeout;

        let stream = match self.stream.as_mut() {
            Some(stream) => stream,
            None => {
                self.state = ConnectionState::Disconnected;
                return Err(RconError::Connection("socket already closed".to_string()));
            }
        };

        tracing::trace!("Sending command: {}", command);
        match Self::exchange(stream, request_id, command, deadline).await {
            Ok(body) => Ok(body),
            Err(e) => {
                self.teardown();
                Err(e)
            }
        }
    }

    /// Tear down the socket and return to `Disconnected`
    ///
    /// Idempotent; safe to call on an already-closed or never-opened
    /// Connection, from any state.
    pub async fn disconnect(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
            tracing::debug!("Disconnected from {}:{}", self.config.host, self.config.port);
        }
        self.state = ConnectionState::Disconnected;
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Write the AUTH frame and wait for exactly one response frame
    async fn authenticate(
        stream: &mut TcpStream,
        request_id: i32,
        password: &str,
        deadline: Duration,
    ) -> Result<()> {
        protocol::write_packet(stream, request_id, PacketType::Auth, password).await?;

        let reply = match timeout(deadline, protocol::read_packet(stream)).await {
            Ok(Ok(packet)) => packet,
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(RconError::Authentication(format!(
                    "no auth response within {:?}",
                    deadline
                )))
            }
        };

        if reply.is_auth_failure() {
            return Err(RconError::Authentication(
                "server rejected the password".to_string(),
            ));
        }
        if !reply.is_auth_response() {
            return Err(RconError::Authentication(format!(
                "unexpected reply type {} to auth request",
                reply.packet_type
            )));
        }

        Ok(())
    }

    /// One request/response exchange: write a COMMAND frame, wait for one reply
    async fn exchange(
        stream: &mut TcpStream,
        request_id: i32,
        command: &str,
        deadline: Duration,
    ) -> Result<String> {
        protocol::write_packet(stream, request_id, PacketType::Command, command).await?;

        match timeout(deadline, protocol::read_packet(stream)).await {
            Ok(Ok(reply)) => Ok(reply.body),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(RconError::CommandTimeout(deadline)),
        }
    }

    /// Drop the socket without the graceful half-close
    fn teardown(&mut self) {
        self.stream = None;
        self.state = ConnectionState::Disconnected;
    }

    fn next_request_id(&mut self) -> i32 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.next_request_id
    }
}
