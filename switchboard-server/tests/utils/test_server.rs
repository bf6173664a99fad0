use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use switchboard_core::{ConnectionId, RoomId};
use switchboard_server::{Server, ServerConfig, SignalingService};

use super::test_client::{RECV_TIMEOUT_MS, TestClient};

/// A relay server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub service: SignalingService,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let config = ServerConfig::default().with_bind(SocketAddr::from(([127, 0, 0, 1], 0)));
        let server = Server::bind(config)
            .await
            .context("Failed to bind test server")?;

        let addr = server.local_addr()?;
        let service = server.service().clone();

        tokio::spawn(async move {
            if let Err(e) = server.run().await {
                tracing::error!("Test server failed: {}", e);
            }
        });

        Ok(Self { addr, service })
    }

    /// Connects a client and consumes its WELCOME and its own USER_JOINED.
    pub async fn join(&self, room: &str, username: &str) -> Result<(TestClient, ConnectionId)> {
        let mut client = TestClient::connect(self.addr, room, username).await?;

        let socket_id = client.recv_welcome().await?;
        let joined = client.recv_joined().await?;
        if joined.socket_id != socket_id {
            bail!("USER_JOINED announced {} instead of {}", joined.socket_id, socket_id);
        }

        Ok((client, socket_id))
    }

    /// Polls the registry until `room` has `expected` members.
    pub async fn wait_for_members(&self, room: &str, expected: usize) -> Result<()> {
        let room = RoomId::from(room);
        let start = Instant::now();
        let timeout = Duration::from_millis(RECV_TIMEOUT_MS);

        loop {
            let count = self.service.registry().member_count(&room);
            if count == expected {
                return Ok(());
            }
            if start.elapsed() > timeout {
                bail!("Room '{room}' has {count} members, expected {expected}");
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}
