//! Typed command wrappers
//!
//! Thin wrappers over [`Connection::send_command`], each producing the
//! console command string for one moderation operation.

use super::connection::Connection;
use crate::error::Result;

impl Connection {
    /// Run a raw console command verbatim and return the server's reply
    pub async fn execute(&mut self, command: &str) -> Result<String> {
        self.send_command(command).await
    }

    /// `ban <name> "<reason>"`
    pub async fn ban_player(&mut self, name: &str, reason: &str) -> Result<String> {
        self.send_command(&format!("ban {} \"{}\"", name, escape_quotes(reason)))
            .await
    }

    /// `ip-ban <ip> "<reason>"`
    pub async fn ban_ip(&mut self, ip: &str, reason: &str) -> Result<String> {
        self.send_command(&format!("ip-ban {} \"{}\"", ip, escape_quotes(reason)))
            .await
    }

    /// `pardon <name>`
    pub async fn unban_player(&mut self, name: &str) -> Result<String> {
        self.send_command(&format!("pardon {}", name)).await
    }

    /// `ip-pardon <ip>`
    pub async fn unban_ip(&mut self, ip: &str) -> Result<String> {
        self.send_command(&format!("ip-pardon {}", ip)).await
    }

    /// `kick <name> <reason>`
    pub async fn kick_player(&mut self, name: &str, reason: &str) -> Result<String> {
        self.send_command(&format!("kick {} {}", name, reason)).await
    }

    /// `say <message>`
    pub async fn broadcast(&mut self, message: &str) -> Result<String> {
        self.send_command(&format!("say {}", message)).await
    }

    /// `list`
    pub async fn list_players(&mut self) -> Result<String> {
        self.send_command("list").await
    }
}

/// Escape embedded double quotes so a free-text reason stays one console token
///
/// Only `"` is escaped; every other character passes through unchanged. This
/// matches what the console actually accepts and is a known limitation, not
/// an oversight. Widening it would change the accepted input format.
fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
