use crate::transport::{ConnectionHandle, SendError};
use async_trait::async_trait;
use axum::extract::ws::Message;
use futures::{Sink, SinkExt};
use std::fmt::Display;
use std::time::Duration;
use switchboard_core::OutboundMessage;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Frames waiting for the writer task. Senders are parked until their own
/// frame is written, so this only bounds how many can be parked at once.
const QUEUE_CAPACITY: usize = 64;

/// How long one socket write may stall before the peer counts as gone.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

type Outcome = Result<(), SendError>;

/// Connection handle backed by a WebSocket sink.
///
/// Frames are handed to a dedicated writer task over a bounded channel and
/// written in the order they were queued. `send` resolves once the socket
/// has accepted the frame or the write has failed.
#[derive(Clone)]
pub struct WsConnection {
    tx: mpsc::Sender<(Message, oneshot::Sender<Outcome>)>,
}

impl WsConnection {
    /// Spawns the writer task for `sink`. The task ends when the socket
    /// rejects or stalls a write, or every handle has been dropped.
    pub fn spawn<S>(sink: S) -> (Self, JoinHandle<()>)
    where
        S: Sink<Message> + Unpin + Send + 'static,
        S::Error: Display,
    {
        Self::spawn_with_timeout(sink, WRITE_TIMEOUT)
    }

    pub fn spawn_with_timeout<S>(mut sink: S, write_timeout: Duration) -> (Self, JoinHandle<()>)
    where
        S: Sink<Message> + Unpin + Send + 'static,
        S::Error: Display,
    {
        let (tx, mut rx) = mpsc::channel::<(Message, oneshot::Sender<Outcome>)>(QUEUE_CAPACITY);

        let writer = tokio::spawn(async move {
            while let Some((msg, ack)) = rx.recv().await {
                let outcome = match tokio::time::timeout(write_timeout, sink.send(msg)).await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(SendError::Write(e.to_string())),
                    Err(_) => Err(SendError::TimedOut(write_timeout)),
                };
                if let Err(e) = &outcome {
                    debug!("WebSocket write failed, stopping writer: {}", e);
                }
                let failed = outcome.is_err();
                let _ = ack.send(outcome);
                if failed {
                    break;
                }
            }
            rx.close();
            let _ = tokio::time::timeout(write_timeout, sink.close()).await;
        });

        (Self { tx }, writer)
    }
}

#[async_trait]
impl ConnectionHandle for WsConnection {
    async fn send(&self, message: &OutboundMessage) -> Result<(), SendError> {
        let json = message.to_json().inspect_err(|e| {
            error!("Failed to serialize '{}' message: {}", message.action(), e);
        })?;

        let (ack, written) = oneshot::channel();
        self.tx
            .send((Message::Text(json.into()), ack))
            .await
            .map_err(|_| SendError::Closed)?;

        written.await.map_err(|_| SendError::Closed)?
    }
}
