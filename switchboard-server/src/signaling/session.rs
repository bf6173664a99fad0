//! Per-connection lifecycle: `CONNECTING → JOINED → CLOSED`.
//!
//! [`Session::open`] performs the join and returns a session in the JOINED
//! state; [`Session::pump`] relays inbound messages until the first read
//! failure; [`Session::close`] consumes the session, performing the leave.
//! A read failure is never retried.

use crate::relay::{Dispatch, fan_out};
use crate::signaling::SignalingService;
use crate::transport::{ReadError, SharedConnection, next_envelope};
use axum::extract::ws::Message;
use futures::Stream;
use switchboard_core::{ClientIdentity, OutboundMessage, PresenceUpdate, RoomId, ServerMessage};
use tracing::{debug, info, warn};

pub struct Session {
    service: SignalingService,
    room_id: RoomId,
    identity: ClientIdentity,
}

impl Session {
    /// Joins the room, welcomes the connection and announces it to everyone
    /// in the join snapshot, itself included.
    pub async fn open(
        service: SignalingService,
        room_id: RoomId,
        username: String,
        connection: SharedConnection,
    ) -> Self {
        let joined = service
            .registry()
            .join(&room_id, username, connection.clone());
        let identity = joined.identity;

        let welcome = OutboundMessage::from(ServerMessage::Welcome {
            socket_id: identity.socket_id,
        });
        if let Err(e) = connection.send(&welcome).await {
            warn!(room = %room_id, "Failed to welcome {}: {}", identity.socket_id, e);
        }

        let announcement = OutboundMessage::from(ServerMessage::UserJoined(PresenceUpdate {
            clients: joined.room.clients,
            username: identity.username.clone(),
            socket_id: identity.socket_id,
        }));
        fan_out(&joined.room.connections, &announcement).await;

        info!(
            room = %room_id,
            "Client {} ({}) connected",
            identity.username, identity.socket_id
        );

        Self {
            service,
            room_id,
            identity,
        }
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Reads and dispatches messages one at a time, in arrival order, until a
    /// read fails. Returns the failure.
    pub async fn pump<S>(&self, inbound: &mut S) -> ReadError
    where
        S: Stream<Item = Result<Message, axum::Error>> + Unpin,
    {
        loop {
            let envelope = match next_envelope(inbound).await {
                Ok(envelope) => envelope,
                Err(e) => return e,
            };
            let action = envelope.action.clone();

            let sender = self
                .service
                .registry()
                .identity_of(&self.room_id, &self.identity.socket_id);
            let outcome = self
                .service
                .relay()
                .dispatch(&self.room_id, sender.as_ref(), envelope)
                .await;

            match outcome {
                Dispatch::Dropped => debug!(
                    room = %self.room_id,
                    "'{}' from {} had no recipient", action, self.identity.socket_id
                ),
                outcome => debug!(
                    room = %self.room_id,
                    ?outcome,
                    "Handled '{}' from {}", action, self.identity.socket_id
                ),
            }
        }
    }

    /// Leaves the room and tells whoever remains.
    pub async fn close(self) {
        let left = self
            .service
            .registry()
            .leave(&self.room_id, &self.identity.socket_id);

        let Some(identity) = left.identity else {
            debug!(room = %self.room_id, "{} already left", self.identity.socket_id);
            return;
        };

        let announcement = OutboundMessage::from(ServerMessage::UserLeft(PresenceUpdate {
            clients: left.remaining.clients,
            username: identity.username.clone(),
            socket_id: identity.socket_id,
        }));
        fan_out(&left.remaining.connections, &announcement).await;

        info!(
            room = %self.room_id,
            "Client {} ({}) disconnected",
            identity.username, identity.socket_id
        );
    }

    /// Runs a connection from join to leave.
    pub async fn run<S>(
        service: SignalingService,
        room_id: RoomId,
        username: String,
        connection: SharedConnection,
        mut inbound: S,
    ) where
        S: Stream<Item = Result<Message, axum::Error>> + Unpin,
    {
        let session = Self::open(service, room_id, username, connection).await;
        match session.pump(&mut inbound).await {
            ReadError::Closed => debug!(
                room = %session.room_id,
                "{} closed the connection",
                session.identity.socket_id
            ),
            reason => warn!(
                room = %session.room_id,
                "Closing session for {}: {}",
                session.identity.socket_id, reason
            ),
        }
        session.close().await;
    }
}
