//! Command API Tests
//!
//! Verifies the exact console command strings the typed wrappers put on the
//! wire, captured by the fake server.

mod common;

use common::{Behavior, FakeServer};
use sentinel_rcon::{Connection, RconConfig};

async fn connected_pair() -> (FakeServer, Connection) {
    let server = FakeServer::spawn(Behavior::Echo {
        password: "secret".to_string(),
        reply: "ok".to_string(),
    })
    .await;

    let config = RconConfig::builder()
        .host(server.addr().ip().to_string())
        .port(server.addr().port())
        .password("secret")
        .build();

    let mut conn = Connection::new(config);
    conn.connect().await.expect("connect to fake server");

    (server, conn)
}

// =============================================================================
// Command String Tests
// =============================================================================

#[tokio::test]
async fn test_ban_player_format() {
    let (server, mut conn) = connected_pair().await;

    conn.ban_player("Alice", "griefing spawn").await.unwrap();
    conn.disconnect().await;

    assert_eq!(server.commands(), vec![r#"ban Alice "griefing spawn""#]);
}

#[tokio::test]
async fn test_ban_player_escapes_quotes() {
    let (server, mut conn) = connected_pair().await;

    conn.ban_player("Alice", r#"said "hi""#).await.unwrap();
    conn.disconnect().await;

    // The embedded quote is escaped, keeping the reason one console token
    assert_eq!(server.commands(), vec![r#"ban Alice "said \"hi\"""#]);
}

#[tokio::test]
async fn test_ban_ip_format() {
    let (server, mut conn) = connected_pair().await;

    conn.ban_ip("203.0.113.7", "proxy abuse").await.unwrap();
    conn.disconnect().await;

    assert_eq!(server.commands(), vec![r#"ip-ban 203.0.113.7 "proxy abuse""#]);
}

#[tokio::test]
async fn test_unban_formats() {
    let (server, mut conn) = connected_pair().await;

    conn.unban_player("Alice").await.unwrap();
    conn.unban_ip("203.0.113.7").await.unwrap();
    conn.disconnect().await;

    assert_eq!(
        server.commands(),
        vec!["pardon Alice", "ip-pardon 203.0.113.7"]
    );
}

#[tokio::test]
async fn test_kick_player_format() {
    let (server, mut conn) = connected_pair().await;

    conn.kick_player("Bob", "spamming").await.unwrap();
    conn.disconnect().await;

    // Kick reasons are not quoted
    assert_eq!(server.commands(), vec!["kick Bob spamming"]);
}

#[tokio::test]
async fn test_broadcast_format() {
    let (server, mut conn) = connected_pair().await;

    conn.broadcast("restarting in 5 minutes").await.unwrap();
    conn.disconnect().await;

    assert_eq!(server.commands(), vec!["say restarting in 5 minutes"]);
}

#[tokio::test]
async fn test_list_players_format() {
    let (server, mut conn) = connected_pair().await;

    let reply = conn.list_players().await.unwrap();
    conn.disconnect().await;

    assert_eq!(reply, "ok");
    assert_eq!(server.commands(), vec!["list"]);
}

#[tokio::test]
async fn test_execute_passes_command_verbatim() {
    let (server, mut conn) = connected_pair().await;

    conn.execute(r#"whitelist add "Carol""#).await.unwrap();
    conn.disconnect().await;

    // No escaping, no rewriting
    assert_eq!(server.commands(), vec![r#"whitelist add "Carol""#]);
}
