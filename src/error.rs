//! Error types for the RCON client
//!
//! Provides a unified error type for all operations. Every failure is typed
//! and returned to the caller immediately, with the socket already torn down
//! where applicable, so callers can degrade gracefully (record the ban,
//! annotate the console push as failed) instead of hanging or crashing.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for RCON client operations
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Transport failure mid-stream (write or read on an open socket)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// TCP connect failed or timed out, or no connection is open
    #[error("Connection error: {0}")]
    Connection(String),

    /// Wrong password, or a malformed/unexpected auth response
    #[error("Authentication failed: {0}")]
    Authentication(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Declared frame length out of range, or buffer shorter than declared
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// No response frame arrived within the command deadline
    #[error("Command timed out after {0:?}")]
    CommandTimeout(Duration),
}
