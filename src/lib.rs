//! # Sentinel RCON
//!
//! An asynchronous RCON client for pushing moderation commands (ban, kick,
//! broadcast) into a running game server over its remote-console port.
//!
//! The client speaks a length-prefixed binary protocol over a raw TCP
//! socket: an authentication handshake first, then sequential
//! command/response exchanges. One connection serves one logical
//! administrative operation; connections are never pooled or shared.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Admin Tooling                           │
//! │            (web routes, CLI, bulk actions)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 ConnectionFactory                           │
//! │           (fresh Connection per operation)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Connection                               │
//! │   Disconnected → Connecting → Authenticating → Ready        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!               ┌───────▼───────┐
//!               │  PacketCodec  │
//!               │ (LE framing)  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RconError, Result};
pub use config::RconConfig;
pub use client::{Connection, ConnectionFactory, ConnectionState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
