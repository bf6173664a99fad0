use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::net::SocketAddr;
use switchboard_server::{Server, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about = "WebRTC signaling relay")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = ServerConfig::DEFAULT_BIND)]
    bind: SocketAddr,

    /// Path that accepts WebSocket upgrades.
    #[arg(long, default_value = ServerConfig::DEFAULT_PATH)]
    path: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_bind(self.bind)
            .with_path(self.path.clone())
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let server = Server::bind(cli.server_config())
        .await
        .context("Failed to start signaling server")?;
    let addr = server.local_addr()?;

    println!("{}", "📡 Switchboard is up".green().bold());
    println!("   🔌 ws://{}{}?roomId=<room>&username=<name>", addr, server.path());

    server
        .run_until(shutdown_signal())
        .await
        .context("Signaling server failed")?;

    println!("{}", "👋 Switchboard stopped".cyan());
    Ok(())
}
