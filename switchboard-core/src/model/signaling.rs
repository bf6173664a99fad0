use crate::model::client::ClientIdentity;
use crate::model::connection::ConnectionId;
use crate::model::envelope::Envelope;
use serde::{Deserialize, Serialize};

/// Room roster sent when someone joins or leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceUpdate {
    /// Everyone in the room after the change.
    pub clients: Vec<ClientIdentity>,
    /// Display name of the client that joined or left.
    pub username: String,
    /// Id of the client that joined or left.
    pub socket_id: ConnectionId,
}

/// Messages the server produces itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    Welcome {
        #[serde(rename = "socketId")]
        socket_id: ConnectionId,
    },
    UserJoined(PresenceUpdate),
    UserLeft(PresenceUpdate),
}

/// Anything written to a connection: either a server message or a client
/// envelope being relayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundMessage {
    Server(ServerMessage),
    Relay(Envelope),
}

impl OutboundMessage {
    pub fn action(&self) -> &str {
        match self {
            Self::Server(ServerMessage::Welcome { .. }) => "WELCOME",
            Self::Server(ServerMessage::UserJoined(_)) => "USER_JOINED",
            Self::Server(ServerMessage::UserLeft(_)) => "USER_LEFT",
            Self::Relay(envelope) => &envelope.action,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<ServerMessage> for OutboundMessage {
    fn from(msg: ServerMessage) -> Self {
        Self::Server(msg)
    }
}

impl From<Envelope> for OutboundMessage {
    fn from(envelope: Envelope) -> Self {
        Self::Relay(envelope)
    }
}
