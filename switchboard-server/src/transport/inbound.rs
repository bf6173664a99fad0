use axum::extract::ws::Message;
use futures::{Stream, StreamExt};
use switchboard_core::{DecodeError, Envelope};
use thiserror::Error;

/// Why a session stopped reading. Every variant ends the session the same
/// way: the peer is treated as gone.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("connection closed by peer")]
    Closed,

    #[error("transport error: {0}")]
    Transport(#[from] axum::Error),

    #[error("undecodable frame: {0}")]
    Decode(#[from] DecodeError),
}

/// Waits for the next data frame and decodes it. Ping and pong frames are
/// skipped; the transport answers pings on its own.
pub async fn next_envelope<S>(inbound: &mut S) -> Result<Envelope, ReadError>
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        let frame = match inbound.next().await {
            Some(frame) => frame?,
            None => return Err(ReadError::Closed),
        };

        match frame {
            Message::Text(text) => return Ok(Envelope::decode(text.as_str())?),
            Message::Binary(bytes) => return Ok(Envelope::decode_slice(&bytes)?),
            Message::Close(_) => return Err(ReadError::Closed),
            Message::Ping(_) | Message::Pong(_) => continue,
        }
    }
}
