//! Client Module
//!
//! The connection state machine, typed command wrappers, and the factory
//! that stamps out one fresh Connection per administrative operation.

mod connection;
mod commands;
mod factory;

pub use connection::{Connection, ConnectionState};
pub use factory::ConnectionFactory;
