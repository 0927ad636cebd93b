//! Fake RCON server
//!
//! Speaks just enough of the wire protocol for integration tests: accepts a
//! single connection, answers the auth handshake, then serves scripted
//! command replies while recording every command body it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use sentinel_rcon::protocol::{self, PacketType};

/// How the fake server treats traffic after the TCP accept
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Check the password, then answer every command with `reply`
    Echo { password: String, reply: String },

    /// Reject the auth handshake with request id -1
    RejectAuth,

    /// Accept auth, then never answer commands
    Mute { password: String },
}

pub struct FakeServer {
    addr: SocketAddr,
    commands: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl FakeServer {
    /// Bind an ephemeral port and serve one connection with `behavior`
    pub async fn spawn(behavior: Behavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake server");
        let addr = listener.local_addr().expect("fake server addr");

        let commands = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&commands);

        let handle = tokio::spawn(async move {
            let (mut stream, _) = match listener.accept().await {
                Ok(pair) => pair,
                Err(_) => return,
            };
            let _ = serve(&mut stream, behavior, log).await;
        });

        Self {
            addr,
            commands,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Command bodies received so far, in arrival order
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("commands lock").clone()
    }

    /// Wait until the client's socket is observed closed (EOF on read)
    pub async fn closed(self) {
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("fake server still saw an open client socket after 5s")
            .expect("fake server task panicked");
    }
}

async fn serve(
    stream: &mut TcpStream,
    behavior: Behavior,
    log: Arc<Mutex<Vec<String>>>,
) -> sentinel_rcon::Result<()> {
    // Handshake first: exactly one AUTH frame, one reply
    let auth = protocol::read_packet(stream).await?;

    let accepted = match &behavior {
        Behavior::RejectAuth => false,
        Behavior::Echo { password, .. } | Behavior::Mute { password } => auth.body == *password,
    };

    let reply_id = if accepted { auth.request_id } else { -1 };
    let frame = protocol::encode_packet(reply_id, PacketType::AUTH_RESPONSE, "");
    stream.write_all(&frame).await?;

    // Command loop: record bodies, reply per behavior, stop on EOF
    loop {
        let packet = match protocol::read_packet(stream).await {
            Ok(packet) => packet,
            Err(_) => return Ok(()),
        };
        log.lock().expect("commands lock").push(packet.body.clone());

        if let Behavior::Echo { reply, .. } = &behavior {
            let frame =
                protocol::encode_packet(packet.request_id, PacketType::ResponseValue, reply);
            stream.write_all(&frame).await?;
        }
    }
}
