use crate::relay::{FanOut, fan_out};
use crate::room::RoomRegistry;
use serde_json::Value;
use switchboard_core::{Action, ClientIdentity, Envelope, OutboundMessage, RoomId};
use tracing::{debug, warn};

/// What happened to one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Sent to the named peer; `delivered` is false if that write failed.
    Targeted { delivered: bool },
    /// The named peer is not in the room.
    Dropped,
    /// Sent to everyone in the room.
    Broadcast(FanOut),
}

/// Routes inbound envelopes to the right members of a room.
#[derive(Clone)]
pub struct RelayEngine {
    registry: RoomRegistry,
}

impl RelayEngine {
    pub fn new(registry: RoomRegistry) -> Self {
        Self { registry }
    }

    /// `sender` is the sender's identity as read from the registry just before
    /// dispatch; it is only consulted for targeted actions.
    pub async fn dispatch(
        &self,
        room_id: &RoomId,
        sender: Option<&ClientIdentity>,
        envelope: Envelope,
    ) -> Dispatch {
        match Action::classify(&envelope.action) {
            Action::Targeted => self.relay_to_target(room_id, sender, envelope).await,
            Action::Presence | Action::Broadcast => self.broadcast(room_id, envelope).await,
        }
    }

    async fn relay_to_target(
        &self,
        room_id: &RoomId,
        sender: Option<&ClientIdentity>,
        mut envelope: Envelope,
    ) -> Dispatch {
        let target_id = envelope.payload_str("socketId").to_owned();

        let Some(target) = self.registry.find_by_socket_id(room_id, &target_id) else {
            debug!(
                room = %room_id,
                "Dropping '{}' for absent peer '{}'",
                envelope.action, target_id
            );
            return Dispatch::Dropped;
        };

        let from = sender
            .map(|identity| identity.socket_id.to_string())
            .unwrap_or_default();
        envelope
            .payload
            .insert("fromSocketId".to_owned(), Value::String(from));

        let message = OutboundMessage::from(envelope);
        match target.send(&message).await {
            Ok(()) => {
                debug!(room = %room_id, "Relayed '{}' to {}", message.action(), target_id);
                Dispatch::Targeted { delivered: true }
            }
            Err(e) => {
                warn!(
                    room = %room_id,
                    "Failed to relay '{}' to {}: {}",
                    message.action(), target_id, e
                );
                Dispatch::Targeted { delivered: false }
            }
        }
    }

    async fn broadcast(&self, room_id: &RoomId, envelope: Envelope) -> Dispatch {
        let members = self.registry.snapshot_all(room_id);
        debug!(
            room = %room_id,
            "Broadcasting action '{}' to {} clients",
            envelope.action,
            members.len()
        );

        let report = fan_out(&members.connections, &OutboundMessage::from(envelope)).await;
        Dispatch::Broadcast(report)
    }
}
