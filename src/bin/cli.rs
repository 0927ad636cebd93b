//! Sentinel RCON CLI
//!
//! Operator front door for the client: connects, authenticates, runs one
//! operation, prints the server's reply.

use clap::{Parser, Subcommand};
use sentinel_rcon::{Connection, RconConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Sentinel RCON
#[derive(Parser, Debug)]
#[command(name = "sentinel-rcon")]
#[command(about = "RCON client for game server administration")]
#[command(version)]
struct Args {
    /// Server hostname or IP address
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// RCON port
    #[arg(short = 'P', long, default_value = "2755")]
    port: u16,

    /// RCON password
    #[arg(short, long, default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ban a player by name
    Ban {
        /// Player name
        player: String,

        /// Ban reason shown to the player
        reason: String,
    },

    /// Ban an IP address
    BanIp {
        /// IP address
        ip: String,

        /// Ban reason
        reason: String,
    },

    /// Lift a player ban
    Pardon {
        /// Player name
        player: String,
    },

    /// Lift an IP ban
    PardonIp {
        /// IP address
        ip: String,
    },

    /// Kick a player from the server
    Kick {
        /// Player name
        player: String,

        /// Kick reason
        reason: String,
    },

    /// Broadcast a message to all players
    Say {
        /// Message text
        message: String,
    },

    /// List online players
    List,

    /// Run a raw console command
    Exec {
        /// Command text, passed verbatim
        command: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sentinel_rcon=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = RconConfig::builder()
        .host(&args.host)
        .port(args.port)
        .password(&args.password)
        .build();

    let mut conn = Connection::new(config);
    if let Err(e) = conn.connect().await {
        tracing::error!("RCON: {}", e);
        std::process::exit(1);
    }

    let result = match &args.command {
        Commands::Ban { player, reason } => conn.ban_player(player, reason).await,
        Commands::BanIp { ip, reason } => conn.ban_ip(ip, reason).await,
        Commands::Pardon { player } => conn.unban_player(player).await,
        Commands::PardonIp { ip } => conn.unban_ip(ip).await,
        Commands::Kick { player, reason } => conn.kick_player(player, reason).await,
        Commands::Say { message } => conn.broadcast(message).await,
        Commands::List => conn.list_players().await,
        Commands::Exec { command } => conn.execute(command).await,
    };

    conn.disconnect().await;

    match result {
        Ok(reply) if reply.is_empty() => println!("OK"),
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            tracing::error!("RCON: {}", e);
            std::process::exit(1);
        }
    }
}
