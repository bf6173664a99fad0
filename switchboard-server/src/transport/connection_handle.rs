use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use switchboard_core::OutboundMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    /// The connection's writer has gone away.
    #[error("connection closed")]
    Closed,

    #[error("write failed: {0}")]
    Write(String),

    #[error("write stalled for {0:?}")]
    TimedOut(Duration),

    #[error("failed to serialize outbound message: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write side of one client's duplex channel.
///
/// `send` may be called concurrently from any session broadcasting into the
/// room; implementations serialize writes per connection and resolve only
/// once the write has been accepted or has failed. A failed send means
/// the peer is unreachable for this message and nothing more: the peer is
/// removed from its room only when its own read loop fails.
#[async_trait]
pub trait ConnectionHandle: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), SendError>;
}

pub type SharedConnection = Arc<dyn ConnectionHandle>;
